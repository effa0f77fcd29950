use crate::domain::categories::OTHER;
use crate::domain::model::ListType;

type KeywordTable = &'static [(&'static str, &'static [&'static str])];

// 順序即優先權：第一個命中的類別勝出
// 加工食品（麵包、零食、乳製品、乾貨）排在生鮮之前，"tomato sauce" 才不會落到 Produce。
// 避免太短的字根："ham" 會命中 shampoo，"egg" 會命中 eggplant，"can" 幾乎無所不在。
const GROCERY_KEYWORDS: KeywordTable = &[
    (
        "Frozen",
        &[
            "ice cream", "frozen", "pizza", "popsicle", "waffle", "tater tot", "corn dog",
            "veggie burger",
        ],
    ),
    (
        "Household",
        &[
            "paper", "towel", "tissue", "napkin", "foil", "cleaner", "detergent", "bleach",
            "soap", "sponge", "trash bag", "garbage bag", "batteries", "light bulb",
            "disinfect", "plastic wrap",
        ],
    ),
    (
        "Bakery",
        &[
            "bread", "bagel", "muffin", "croissant", "cake", "donut", "doughnut", "pie",
            "dinner roll", "cinnamon roll", "rolls", "buns", "tortillas", "pita",
        ],
    ),
    (
        "Snacks",
        &[
            "chips", "cracker", "cookie", "pretzel", "popcorn", "candy", "chocolate",
            "granola", "peanut", "almonds", "cashews", "pistachio", "trail mix", "licorice",
            "gummy", "caramel", "jerky",
        ],
    ),
    ("Dairy", &["cheese", "yogurt", "butter", "cream"]),
    (
        "Pantry",
        &[
            "rice", "pasta", "spaghetti", "noodle", "cereal", "oats", "oatmeal", "soup",
            "sauce", "oil", "vinegar", "flour", "sugar", "salt", "spice", "canned", "can of",
            "cans of", "black beans", "kidney beans", "pinto beans", "baked beans",
            "refried beans", "chickpeas", "syrup", "ketchup", "catsup", "mustard", "mayo",
            "baking soda", "baking powder", "broth",
        ],
    ),
    (
        "Refrigerated",
        &["milk", "eggs", "egg white", "tofu", "hummus", "juice", "lemonade", "salsa", "pudding"],
    ),
    (
        "Produce",
        &[
            "apple", "banana", "orange", "lemon", "lime", "grape", "berry", "berries",
            "melon", "cantaloupe", "peach", "pear", "avocado", "lettuce", "tomato", "onion",
            "garlic", "potato", "carrot", "broccoli", "cauliflower", "spinach", "kale",
            "celery", "cucumber", "bell pepper", "jalapeno", "mushroom", "zucchini", "squash",
            "eggplant", "green beans", "cilantro", "basil", "parsley", "fruit", "vegetable",
            "veggie",
        ],
    ),
    (
        "Meat & Seafood",
        &[
            "chicken", "beef", "pork", "steak", "turkey", "hot dog", "fish", "salmon", "tuna",
            "shrimp", "crab", "bacon", "sausage", "deli ham", "ham steak", "spiral ham",
            "lamb", "ribs", "pepperoni", "salami", "meatball",
        ],
    ),
    ("Pet Supplies", &["dog", "cat", "pet", "kibble", "litter"]),
    (
        "Personal Care",
        &[
            "shampoo", "conditioner", "toothpaste", "toothbrush", "floss", "deodorant",
            "lotion", "razor", "sunscreen", "body wash", "mouthwash", "vitamin",
        ],
    ),
    ("Baby", &["diaper", "baby wipes", "baby food", "formula", "baby"]),
    (
        "Beverages",
        &[
            "water", "soda", "coffee", "tea", "beer", "wine", "champagne", "kombucha", "cola",
            "drink",
        ],
    ),
];

// "card" 單獨會命中 cardigan，"car" 會命中 card，"pot" 會命中 potting soil
const SHOPPING_KEYWORDS: KeywordTable = &[
    (
        "Gifts",
        &["gift", "greeting card", "birthday card", "thank you card", "wrapping paper", "balloon"],
    ),
    (
        "Automotive",
        &[
            "tire", "brake", "motor oil", "wiper", "windshield", "car wax", "car seat",
            "car charger", "antifreeze", "jumper cable", "dash cam",
        ],
    ),
    (
        "Shoes",
        &["shoe", "sneaker", "boots", "sandal", "high heels", "loafer", "slipper", "cleats", "flip flop"],
    ),
    (
        "Electronics",
        &[
            "phone", "laptop", "computer", "tablet", "headphone", "earbuds", "charger",
            "charging", "cables", "hdmi", "usb", "television", "smart tv", "camera", "speaker",
            "monitor", "keyboard", "mouse", "smartwatch", "console",
        ],
    ),
    (
        "Home & Kitchen",
        &[
            "frying pan", "saucepan", "skillet", "baking sheet", "cookware", "pots and pans",
            "cooking pot", "stock pot", "teapot", "knife", "knives", "plates", "bowls", "mug",
            "measuring cup", "towel", "bed sheet", "sheets", "pillow", "blanket", "candle",
            "lamp", "blender", "toaster", "kettle", "spatula", "utensil", "cutting board",
            "can opener", "coaster", "vacuum", "shower curtain",
        ],
    ),
    (
        "Furniture",
        &[
            "chair", "table", "desk", "sofa", "couch", "bed frame", "shelf", "dresser",
            "mattress", "bookcase", "ottoman", "nightstand",
        ],
    ),
    (
        "Clothing",
        &[
            "shirt", "pants", "panties", "jeans", "dress", "skirt", "jacket", "coat", "sweater",
            "cardigan", "hoodie", "socks", "underwear", "shorts", "leggings", "pajama", "suits",
            "swimsuit", "tights", "pantyhose", "suspenders",
        ],
    ),
    (
        "Accessories",
        &[
            "hats", "sun hat", "beanie", "baseball cap", "scarf", "glove", "belt", "wallet",
            "purse", "handbag", "backpack", "suitcase", "luggage", "watch", "sunglasses",
            "jewelry", "necklace", "pendant", "earring", "bracelet", "umbrella",
        ],
    ),
    (
        "Beauty",
        &[
            "makeup", "lipstick", "mascara", "perfume", "cologne", "nail polish", "skincare",
            "moisturizer", "eyeliner", "foundation",
        ],
    ),
    (
        "Health",
        &[
            "vitamin", "medicine", "bandage", "thermometer", "supplement", "first aid",
            "pain reliever", "allergy",
        ],
    ),
    (
        "Toys & Games",
        &["toy", "lego", "puzzle", "board game", "card game", "doll", "video game", "stuffed animal"],
    ),
    (
        "Sports & Outdoors",
        &[
            "basketball", "football", "soccer", "baseball", "tennis", "volleyball", "bike",
            "bicycle", "tent", "yoga", "dumbbell", "running", "camping", "fishing", "golf",
            "hiking", "helmet", "treadmill",
        ],
    ),
    (
        "Garden & Tools",
        &[
            "seeds", "soil", "hose", "shovel", "rake", "drill", "hammer", "screwdriver",
            "wrench", "pliers", "plant", "lawn mower", "fertilizer", "tape measure",
        ],
    ),
    (
        "Office Supplies",
        &[
            "pen", "pencil", "notebook", "printer", "stapler", "ink cartridge", "folder",
            "tape", "sticky notes", "highlighter", "envelope", "binder",
        ],
    ),
    ("Books & Media", &["book", "novel", "magazine", "dvd", "blu-ray", "vinyl"]),
];

fn keyword_table(list_type: ListType) -> KeywordTable {
    match list_type {
        ListType::Shopping => SHOPPING_KEYWORDS,
        ListType::Grocery | ListType::Project => GROCERY_KEYWORDS,
    }
}

/// Case-insensitive substring match against the list type's keyword table.
/// Returns `"Other"` when nothing matches.
pub fn fallback_categorize(item_name: &str, list_type: ListType) -> &'static str {
    let name = item_name.to_lowercase();

    keyword_table(list_type)
        .iter()
        .find(|(_, words)| words.iter().any(|word| name.contains(word)))
        .map(|(category, _)| *category)
        .unwrap_or(OTHER)
}
