use contracts::domain::a004_supplier::aggregate::{SupplierDto, SupplierFields};

use crate::domain::common::{ResourceService, SeedData};

pub type SupplierService = ResourceService<SupplierFields>;

fn supplier(description: &str, contact_name: &str, email: &str, phone: &str) -> SupplierDto {
    SupplierDto {
        description: description.into(),
        fields: SupplierFields {
            contact_name: contact_name.into(),
            email: email.into(),
            phone: phone.into(),
            is_active: true,
        },
        ..Default::default()
    }
}

impl SeedData for SupplierFields {
    fn test_data() -> Vec<SupplierDto> {
        vec![
            supplier("Carnes del Norte", "Lucía Gómez", "pedidos@carnesnorte.es", "+34 600 111 222"),
            supplier("Huerta Viva", "Andrés Ruiz", "andres@huertaviva.es", "+34 600 333 444"),
            supplier("Pescados Atlántico", "Marta Sanz", "ventas@atlantico.es", "+34 600 555 666"),
        ]
    }
}
