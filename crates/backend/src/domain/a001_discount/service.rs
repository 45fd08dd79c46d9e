use contracts::domain::a001_discount::aggregate::{DiscountDto, DiscountFields};

use crate::domain::common::{ResourceService, SeedData};

pub type DiscountService = ResourceService<DiscountFields>;

fn discount(description: &str, percentage: f64, is_active: bool, comment: Option<&str>) -> DiscountDto {
    DiscountDto {
        description: description.into(),
        comment: comment.map(Into::into),
        fields: DiscountFields {
            percentage,
            is_active,
        },
        ..Default::default()
    }
}

impl SeedData for DiscountFields {
    fn test_data() -> Vec<DiscountDto> {
        vec![
            discount("Primer pedido", 15.0, true, Some("Para clientes nuevos")),
            discount("Pedido grande", 20.0, false, None),
            discount("Recomendación", 10.0, true, Some("Código de referido")),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::memory_store::{MemoryStore, RecordingLogger};
    use crate::domain::common::ServiceOptions;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_insert_test_data_allocates_codes() {
        let service: DiscountService = ResourceService::new(
            Arc::new(MemoryStore::new()),
            Arc::new(RecordingLogger::default()),
            ServiceOptions::default(),
        );
        let created = service.insert_test_data().await.unwrap();
        let codes: Vec<_> = created.iter().map(|r| r.base.code.as_str()).collect();
        assert_eq!(codes, vec!["DES1", "DES2", "DES3"]);

        // повторная вставка продолжает нумерацию
        let again = service.insert_test_data().await.unwrap();
        assert_eq!(again[0].base.code, "DES4");
    }
}
