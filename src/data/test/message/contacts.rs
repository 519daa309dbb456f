use super::*;

/// A student's contacts are the homeroom teacher and every assigned
/// subject teacher of their classes, and nobody else.
#[tokio::test]
async fn student_sees_homeroom_and_subject_teachers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_timetable_tables()
        .with_table(Message)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let year = factory::academic::create_academic_year(db).await?;
    let semester = factory::academic::create_semester(db, year.id).await?;
    let (homeroom_user, homeroom) = factory::user::create_teacher(db).await?;
    let (subject_user, subject_teacher) = factory::user::create_teacher(db).await?;
    factory::user::create_teacher(db).await?;

    let class = factory::class::ClassFactory::new(db, year.id)
        .homeroom_teacher(homeroom.id)
        .build()
        .await?;
    let subject = factory::subject::create_subject(db).await?;
    let (_, student) = factory::user::create_student(db).await?;
    factory::class::enroll(db, student.id, class.id).await?;
    factory::class::create_assignment(db, subject_teacher.id, class.id, subject.id, semester.id)
        .await?;

    let contacts = MessageRepository::new(db)
        .teacher_contacts_of_student(student.id)
        .await?;

    assert_eq!(contacts.len(), 2);
    assert!(contacts.contains(&homeroom_user.id));
    assert!(contacts.contains(&subject_user.id));

    Ok(())
}

/// A teacher's contacts are the students of every class they run or
/// teach a subject in.
#[tokio::test]
async fn teacher_sees_students_of_their_classes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_timetable_tables()
        .with_table(Message)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let year = factory::academic::create_academic_year(db).await?;
    let semester = factory::academic::create_semester(db, year.id).await?;
    let (_, teacher) = factory::user::create_teacher(db).await?;

    let taught_class = factory::class::create_class(db, year.id).await?;
    let other_class = factory::class::create_class(db, year.id).await?;
    let subject = factory::subject::create_subject(db).await?;
    factory::class::create_assignment(db, teacher.id, taught_class.id, subject.id, semester.id)
        .await?;

    let (taught_user, taught_student) = factory::user::create_student(db).await?;
    let (_, other_student) = factory::user::create_student(db).await?;
    factory::class::enroll(db, taught_student.id, taught_class.id).await?;
    factory::class::enroll(db, other_student.id, other_class.id).await?;

    let contacts = MessageRepository::new(db)
        .student_contacts_of_teacher(teacher.id)
        .await?;

    assert_eq!(contacts, vec![taught_user.id]);

    Ok(())
}

/// A student with no enrollments has nobody to message.
#[tokio::test]
async fn unenrolled_student_has_no_contacts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_timetable_tables()
        .with_table(Message)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, student) = factory::user::create_student(db).await?;

    let contacts = MessageRepository::new(db)
        .teacher_contacts_of_student(student.id)
        .await?;

    assert!(contacts.is_empty());

    Ok(())
}
