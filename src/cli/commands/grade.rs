//! Grade lookup command handler

use gradesheet::core::{GradingScale, PassFail};

/// Print the letter grade for `score`, with the pass/fail mark of a 1-credit course
pub fn run(score: i32, scale: GradingScale) {
    let grade = scale.grade(score);
    let mark = PassFail::from_total(score);
    println!("{score} → {grade} ({scale} scale; 1-credit: {mark})");
}
