use crate::models::domain::{CourseMaterial, QuizQuestion};
