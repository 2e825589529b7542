//! Starter goals written to an empty collection on first open.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::goals_model::Goal;

struct SampleGoal {
    id: &'static str,
    name: &'static str,
    target_amount: i64,
    saved_amount: i64,
    category: &'static str,
    deadline: (i32, u32, u32),
    created_at: (i32, u32, u32),
}

const SAMPLE_GOALS: [SampleGoal; 10] = [
    SampleGoal {
        id: "1",
        name: "Travel Fund - Japan",
        target_amount: 5000,
        saved_amount: 3400,
        category: "Travel",
        deadline: (2025, 12, 31),
        created_at: (2024, 1, 15),
    },
    SampleGoal {
        id: "2",
        name: "Emergency Fund",
        target_amount: 10000,
        saved_amount: 7500,
        category: "Emergency",
        deadline: (2026, 6, 30),
        created_at: (2023, 5, 1),
    },
    SampleGoal {
        id: "3",
        name: "New Laptop",
        target_amount: 1500,
        saved_amount: 1500,
        category: "Electronics",
        deadline: (2024, 7, 20),
        created_at: (2024, 3, 10),
    },
    SampleGoal {
        id: "4",
        name: "Down Payment - House",
        target_amount: 50000,
        saved_amount: 12000,
        category: "Real Estate",
        deadline: (2027, 12, 31),
        created_at: (2024, 2, 1),
    },
    SampleGoal {
        id: "5",
        name: "Car Maintenance",
        target_amount: 800,
        saved_amount: 600,
        category: "Vehicle",
        deadline: (2025, 9, 15),
        created_at: (2024, 6, 1),
    },
    SampleGoal {
        id: "6",
        name: "Education Fund",
        target_amount: 20000,
        saved_amount: 5000,
        category: "Education",
        deadline: (2028, 1, 1),
        created_at: (2024, 4, 20),
    },
    SampleGoal {
        id: "7",
        name: "Holiday Gifts",
        target_amount: 1000,
        saved_amount: 200,
        category: "Shopping",
        deadline: (2024, 8, 10),
        created_at: (2024, 7, 1),
    },
    SampleGoal {
        id: "8",
        name: "New Phone",
        target_amount: 1200,
        saved_amount: 200,
        category: "Electronics",
        deadline: (2025, 1, 31),
        created_at: (2024, 7, 10),
    },
    SampleGoal {
        id: "9",
        name: "Retirement Savings",
        target_amount: 100000,
        saved_amount: 15000,
        category: "Retirement",
        deadline: (2035, 1, 1),
        created_at: (2023, 1, 1),
    },
    SampleGoal {
        id: "10",
        name: "Home Renovation",
        target_amount: 7500,
        saved_amount: 1000,
        category: "Home",
        deadline: (2025, 3, 31),
        created_at: (2024, 5, 15),
    },
];

fn ymd((year, month, day): (i32, u32, u32)) -> NaiveDate {
    // Sample dates are fixed literals and always valid.
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Returns the built-in sample goals, in display order.
pub fn sample_goals() -> Vec<Goal> {
    SAMPLE_GOALS
        .iter()
        .map(|s| Goal {
            id: s.id.to_string(),
            name: s.name.to_string(),
            target_amount: Decimal::from(s.target_amount),
            saved_amount: Decimal::from(s.saved_amount),
            category: s.category.to_string(),
            deadline: ymd(s.deadline),
            created_at: ymd(s.created_at),
        })
        .collect()
}
