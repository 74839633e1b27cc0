pub mod admin_answer;
pub mod admin_question;
pub mod admin_quiz;
pub mod pages;
pub mod quiz;
