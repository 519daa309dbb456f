use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use std::collections::{HashMap, HashSet};

pub struct MessageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MessageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        sender_id: i32,
        recipient_id: i32,
        content: String,
    ) -> Result<entity::message::Model, DbErr> {
        entity::message::ActiveModel {
            sender_id: ActiveValue::Set(sender_id),
            recipient_id: ActiveValue::Set(recipient_id),
            content: ActiveValue::Set(content),
            sent_at: ActiveValue::Set(Utc::now()),
            is_read: ActiveValue::Set(false),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Both directions of a two-party thread, oldest first.
    pub async fn conversation(
        &self,
        user_id: i32,
        peer_id: i32,
    ) -> Result<Vec<entity::message::Model>, DbErr> {
        entity::prelude::Message::find()
            .filter(
                Condition::any()
                    .add(
                        Condition::all()
                            .add(entity::message::Column::SenderId.eq(user_id))
                            .add(entity::message::Column::RecipientId.eq(peer_id)),
                    )
                    .add(
                        Condition::all()
                            .add(entity::message::Column::SenderId.eq(peer_id))
                            .add(entity::message::Column::RecipientId.eq(user_id)),
                    ),
            )
            .order_by_asc(entity::message::Column::SentAt)
            .all(self.db)
            .await
    }

    /// Marks everything the peer sent to this user as read.
    pub async fn mark_read(&self, user_id: i32, peer_id: i32) -> Result<(), DbErr> {
        entity::prelude::Message::update_many()
            .col_expr(entity::message::Column::IsRead, sea_orm::sea_query::Expr::value(true))
            .filter(entity::message::Column::SenderId.eq(peer_id))
            .filter(entity::message::Column::RecipientId.eq(user_id))
            .filter(entity::message::Column::IsRead.eq(false))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Unread message counts per sender for badge rendering.
    pub async fn unread_counts(&self, user_id: i32) -> Result<HashMap<i32, u64>, DbErr> {
        let unread = entity::prelude::Message::find()
            .filter(entity::message::Column::RecipientId.eq(user_id))
            .filter(entity::message::Column::IsRead.eq(false))
            .all(self.db)
            .await?;

        let mut counts: HashMap<i32, u64> = HashMap::new();
        for message in unread {
            *counts.entry(message.sender_id).or_default() += 1;
        }

        Ok(counts)
    }

    /// User ids of every teacher connected to the student's classes, either
    /// as homeroom teacher or through a teaching assignment.
    pub async fn teacher_contacts_of_student(
        &self,
        student_id: i32,
    ) -> Result<Vec<i32>, DbErr> {
        let class_ids: Vec<i32> = entity::prelude::StudentClass::find()
            .filter(entity::student_class::Column::StudentId.eq(student_id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|e| e.class_id)
            .collect();

        if class_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut teacher_ids: HashSet<i32> = HashSet::new();

        let classes = entity::prelude::Class::find()
            .filter(entity::class::Column::Id.is_in(class_ids.clone()))
            .all(self.db)
            .await?;
        teacher_ids.extend(classes.iter().filter_map(|c| c.homeroom_teacher_id));

        let assignments = entity::prelude::TeachingAssignment::find()
            .filter(entity::teaching_assignment::Column::ClassId.is_in(class_ids))
            .all(self.db)
            .await?;
        teacher_ids.extend(assignments.iter().map(|a| a.teacher_id));

        if teacher_ids.is_empty() {
            return Ok(Vec::new());
        }

        let teachers = entity::prelude::Teacher::find()
            .filter(entity::teacher::Column::Id.is_in(teacher_ids))
            .all(self.db)
            .await?;

        Ok(teachers.into_iter().map(|t| t.user_id).collect())
    }

    /// User ids of every student in a class the teacher runs or teaches.
    pub async fn student_contacts_of_teacher(
        &self,
        teacher_id: i32,
    ) -> Result<Vec<i32>, DbErr> {
        let mut class_ids: HashSet<i32> = HashSet::new();

        let homeroom = entity::prelude::Class::find()
            .filter(entity::class::Column::HomeroomTeacherId.eq(teacher_id))
            .all(self.db)
            .await?;
        class_ids.extend(homeroom.iter().map(|c| c.id));

        let assignments = entity::prelude::TeachingAssignment::find()
            .filter(entity::teaching_assignment::Column::TeacherId.eq(teacher_id))
            .all(self.db)
            .await?;
        class_ids.extend(assignments.iter().map(|a| a.class_id));

        if class_ids.is_empty() {
            return Ok(Vec::new());
        }

        let student_ids: HashSet<i32> = entity::prelude::StudentClass::find()
            .filter(entity::student_class::Column::ClassId.is_in(class_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|e| e.student_id)
            .collect();

        if student_ids.is_empty() {
            return Ok(Vec::new());
        }

        let students = entity::prelude::Student::find()
            .filter(entity::student::Column::Id.is_in(student_ids))
            .all(self.db)
            .await?;

        Ok(students.into_iter().map(|s| s.user_id).collect())
    }
}
