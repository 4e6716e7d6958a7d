// Date utility functions

/// English ordinal for a day of the month: 1st, 2nd, 3rd, 4th, 11th, 22nd...
pub fn ordinal_day(day: u32) -> String {
    let suffix = match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{day}{suffix}")
}
