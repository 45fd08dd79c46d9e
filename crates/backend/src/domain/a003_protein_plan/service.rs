use contracts::domain::a003_protein_plan::aggregate::{ProteinPlanDto, ProteinPlanFields};

use crate::domain::common::{ResourceService, SeedData};

pub type ProteinPlanService = ResourceService<ProteinPlanFields>;

impl SeedData for ProteinPlanFields {
    fn test_data() -> Vec<ProteinPlanDto> {
        vec![
            ProteinPlanDto {
                description: "Estándar".into(),
                fields: ProteinPlanFields {
                    protein_grams: 30.0,
                    price: 8.5,
                    is_active: true,
                },
                ..Default::default()
            },
            ProteinPlanDto {
                description: "Alto en proteína".into(),
                comment: Some("Doble ración de carne o pescado".into()),
                fields: ProteinPlanFields {
                    protein_grams: 55.0,
                    price: 11.9,
                    is_active: true,
                },
                ..Default::default()
            },
            ProteinPlanDto {
                description: "Vegetal".into(),
                fields: ProteinPlanFields {
                    protein_grams: 25.0,
                    price: 7.9,
                    is_active: false,
                },
                ..Default::default()
            },
        ]
    }
}
