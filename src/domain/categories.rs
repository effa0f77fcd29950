/// Label every vocabulary ends with; also the catch-all for unmatched items.
pub const OTHER: &str = "Other";

pub const GROCERY_CATEGORIES: [&str; 14] = [
    "Produce",
    "Meat & Seafood",
    "Refrigerated",
    "Dairy",
    "Frozen",
    "Bakery",
    "Pantry",
    "Beverages",
    "Snacks",
    "Household",
    "Personal Care",
    "Baby",
    "Pet Supplies",
    OTHER,
];

pub const SHOPPING_CATEGORIES: [&str; 16] = [
    "Clothing",
    "Shoes",
    "Accessories",
    "Electronics",
    "Home & Kitchen",
    "Furniture",
    "Beauty",
    "Health",
    "Toys & Games",
    "Sports & Outdoors",
    "Books & Media",
    "Office Supplies",
    "Garden & Tools",
    "Automotive",
    "Gifts",
    OTHER,
];

pub fn category_list(categories: &[&str]) -> String {
    categories.join(", ")
}

pub fn is_member(categories: &[&str], label: &str) -> bool {
    categories.contains(&label)
}
