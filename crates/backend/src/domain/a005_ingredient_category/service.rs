use contracts::domain::a005_ingredient_category::aggregate::{
    IngredientCategoryDto, IngredientCategoryFields,
};

use crate::domain::common::{ResourceService, SeedData};

pub type IngredientCategoryService = ResourceService<IngredientCategoryFields>;

impl SeedData for IngredientCategoryFields {
    fn test_data() -> Vec<IngredientCategoryDto> {
        [
            ("Proteínas", Some("Carne, pescado, huevo, legumbres")),
            ("Verduras", None),
            ("Lácteos", Some("Contiene lactosa")),
        ]
        .into_iter()
        .map(|(description, notes)| IngredientCategoryDto {
            description: description.into(),
            fields: IngredientCategoryFields {
                notes: notes.map(Into::into),
                is_active: true,
            },
            ..Default::default()
        })
        .collect()
    }
}
