use contracts::domain::a002_tax::aggregate::{TaxDto, TaxFields};

use crate::domain::common::{ResourceService, SeedData};

pub type TaxService = ResourceService<TaxFields>;

impl SeedData for TaxFields {
    fn test_data() -> Vec<TaxDto> {
        [("IVA general", 21.0, true), ("IVA reducido", 10.0, true), ("IVA superreducido", 4.0, false)]
            .into_iter()
            .map(|(description, rate, is_active)| TaxDto {
                description: description.into(),
                fields: TaxFields { rate, is_active },
                ..Default::default()
            })
            .collect()
    }
}
