pub use super::academic_year::Entity as AcademicYear;
pub use super::attendance::Entity as Attendance;
pub use super::class::Entity as Class;
pub use super::class_material::Entity as ClassMaterial;
pub use super::conduct::Entity as Conduct;
pub use super::message::Entity as Message;
pub use super::parent::Entity as Parent;
pub use super::role::Entity as Role;
pub use super::score::Entity as Score;
pub use super::semester::Entity as Semester;
pub use super::student::Entity as Student;
pub use super::student_class::Entity as StudentClass;
pub use super::student_parent::Entity as StudentParent;
pub use super::subject::Entity as Subject;
pub use super::teacher::Entity as Teacher;
pub use super::teacher_certificate::Entity as TeacherCertificate;
pub use super::teaching_assignment::Entity as TeachingAssignment;
pub use super::timetable::Entity as Timetable;
pub use super::user::Entity as User;
