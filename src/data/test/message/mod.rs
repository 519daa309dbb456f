use crate::data::message::MessageRepository;
use entity::prelude::Message;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod contacts;
mod conversation;
