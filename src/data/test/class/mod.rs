use crate::data::class::ClassRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_students;
mod merge_into;
