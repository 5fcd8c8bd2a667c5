use serde::Serialize;
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Category deciding which conversion and packaging rules apply to an ingredient
#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
)]
pub enum IngredientCategory {
    Liquid,
    DryGoods,
    CountBased,
    Other,
}

const LIQUID_KEYWORDS: &[&str] = &[
    "milk",
    "cream",
    "juice",
    "water",
    "broth",
    "stock",
    "oil",
    "vinegar",
    "sauce",
    "wine",
    "beer",
    "soda",
    "coffee",
    "tea",
    "syrup",
    "honey",
    "soy sauce",
    "tamari",
    "sesame oil",
    "olive oil",
    "lemon juice",
    "lime juice",
    "orange juice",
];

const DRY_GOODS_KEYWORDS: &[&str] = &[
    "flour", "sugar", "rice", "pasta", "oats", "cereal", "beans", "lentils", "quinoa", "salt",
    "spice",
];

const COUNT_BASED_KEYWORDS: &[&str] = &[
    "apple", "orange", "banana", "lemon", "lime", "tomato", "potato", "onion", "garlic", "egg",
    "avocado", "pepper", "carrot", "cucumber", "zucchini",
];

/// A keyword set and the category it assigns
#[derive(Debug)]
pub struct ClassificationRule {
    pub category: IngredientCategory,
    pub keywords: &'static [&'static str],
}

impl ClassificationRule {
    /// Substring containment against an already lower-cased name
    pub fn matches(&self, name: &str) -> bool {
        self.keywords.iter().any(|keyword| name.contains(keyword))
    }
}

/// Classification rules in evaluation order. The first matching rule wins, so
/// "lemon juice" is a liquid even though "lemon" is also count-based.
pub static CLASSIFICATION_RULES: &[ClassificationRule] = &[
    ClassificationRule {
        category: IngredientCategory::Liquid,
        keywords: LIQUID_KEYWORDS,
    },
    ClassificationRule {
        category: IngredientCategory::DryGoods,
        keywords: DRY_GOODS_KEYWORDS,
    },
    ClassificationRule {
        category: IngredientCategory::CountBased,
        keywords: COUNT_BASED_KEYWORDS,
    },
];

/// Ingredient Classifier
///
/// Stateless domain service that assigns a free-text ingredient name to one
/// category. Names are matched case-insensitively by substring, so
/// "Coconut Milk" is a liquid through the "milk" keyword.
/// Anything no rule claims is `IngredientCategory::Other`.
pub struct IngredientClassifier;

impl IngredientClassifier {
    pub fn classify(ingredient_name: &str) -> IngredientCategory {
        let normalized = ingredient_name.trim().to_lowercase();

        let category = CLASSIFICATION_RULES
            .iter()
            .find(|rule| rule.matches(&normalized))
            .map(|rule| rule.category)
            .unwrap_or(IngredientCategory::Other);

        tracing::debug!(ingredient = %normalized, %category, "classified ingredient");

        category
    }
}
