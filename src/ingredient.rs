use std::fmt;

/// Componentes que pueden aparecer en la lista de ingredientes de una bebida
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ingredient {
    Coffee,
    Sugar,
    Milk,
    Vanilla,
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let token = match self {
            Ingredient::Coffee => "coffee",
            Ingredient::Sugar => "sugar",
            Ingredient::Milk => "milk",
            Ingredient::Vanilla => "vanilla",
        };
        f.write_str(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_lowercase_tokens() {
        assert_eq!("coffee", Ingredient::Coffee.to_string());
        assert_eq!("sugar", Ingredient::Sugar.to_string());
        assert_eq!("milk", Ingredient::Milk.to_string());
        assert_eq!("vanilla", Ingredient::Vanilla.to_string());
    }
}
