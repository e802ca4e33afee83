use std::fmt::Display;

/// A product form field.
///
/// Validation errors, touched flags and raw values are all keyed by this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Id,
    Title,
    Price,
    Description,
    Category,
    Image,
}

impl Field {
    /// Every field, in form order.
    pub const ALL: [Field; 6] = [
        Field::Id,
        Field::Title,
        Field::Price,
        Field::Description,
        Field::Category,
        Field::Image,
    ];

    /// The input name, matching the JSON key of [`Product`](crate::model::Product).
    pub fn name(self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Title => "title",
            Field::Price => "price",
            Field::Description => "description",
            Field::Category => "category",
            Field::Image => "image",
        }
    }

    /// The label rendered next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Field::Id => "Id",
            Field::Title => "Titulo",
            Field::Price => "Precio",
            Field::Description => "Descripcion",
            Field::Category => "Categoria",
            Field::Image => "Imagen",
        }
    }

    /// Looks up a field by its input name.
    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|field| field.name() == name)
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
