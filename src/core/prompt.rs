use crate::domain::categories::category_list;
use crate::domain::model::ListType;

pub fn build_prompt(item_name: &str, list_type: ListType, categories: &[&str]) -> String {
    format!(
        "Categorize this {list_type} list item into exactly one of these categories: {categories}.

Item: \"{item_name}\"

Respond with ONLY a JSON object in this exact format:
{{\"category\": \"CategoryName\", \"confidence\": 0.95}}

The confidence should be between 0 and 1.",
        list_type = list_type,
        categories = category_list(categories),
        item_name = item_name,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::categories::SHOPPING_CATEGORIES;

    #[test]
    fn test_prompt_embeds_item_and_vocabulary() {
        let prompt = build_prompt("running shoes", ListType::Shopping, &SHOPPING_CATEGORIES);

        assert!(prompt.starts_with("Categorize this shopping list item"));
        assert!(prompt.contains("Item: \"running shoes\""));
        assert!(prompt.contains("Clothing, Shoes, Accessories"));
        assert!(prompt.contains("Gifts, Other."));
        assert!(prompt.contains(r#"{"category": "CategoryName", "confidence": 0.95}"#));
    }
}
