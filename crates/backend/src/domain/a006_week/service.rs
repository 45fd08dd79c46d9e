use chrono::{Duration, NaiveDate};
use contracts::domain::a006_week::aggregate::{WeekDto, WeekFields};

use crate::domain::common::{ResourceService, SeedData};

pub type WeekService = ResourceService<WeekFields>;

impl SeedData for WeekFields {
    /// Три недели подряд, с понедельника по воскресенье
    fn test_data() -> Vec<WeekDto> {
        let first_monday = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap_or_default();
        (0..3)
            .map(|n| {
                let start_date = first_monday + Duration::weeks(n);
                WeekDto {
                    description: format!("Semana {}", n + 1),
                    fields: WeekFields {
                        start_date,
                        end_date: start_date + Duration::days(6),
                        is_active: n == 0,
                    },
                    ..Default::default()
                }
            })
            .collect()
    }
}
