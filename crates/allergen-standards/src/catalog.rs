//! The shipped canonical allergen table.
//!
//! Fourteen regulated allergen categories followed by two dietary markers.
//! Declaration order matters: when two entries share an alias or label text,
//! the later entry owns it in the alias index.

use allergen_model::CanonicalAllergen;

/// Canonical allergen entries in declaration order.
pub static CANONICAL_ALLERGENS: &[CanonicalAllergen] = &[
    CanonicalAllergen::new(
        "cereals_gluten",
        "Cereals containing gluten",
        &[],
        &[
            "gluten",
            "wheat",
            "rye",
            "barley",
            "oats",
            "spelt",
            "triticale",
            "cereal",
            "cereals",
            "cereals containing gluten",
        ],
    ),
    CanonicalAllergen::new(
        "crustaceans",
        "Crustaceans",
        &[],
        &[
            "crustacean",
            "shrimp",
            "prawn",
            "crab",
            "lobster",
            "crayfish",
            "shellfish",
        ],
    ),
    CanonicalAllergen::new(
        "eggs",
        "Eggs",
        &[],
        &["egg", "eggs", "albumen", "meringue"],
    ),
    CanonicalAllergen::new(
        "fish",
        "Fish",
        &[],
        &["fish", "salmon", "cod", "trout", "haddock"],
    ),
    CanonicalAllergen::new(
        "peanuts",
        "Peanuts",
        &[],
        &[
            "peanut",
            "peanuts",
            "groundnut",
            "groundnuts",
            "satay",
            "arachis",
        ],
    ),
    CanonicalAllergen::new(
        "soybeans",
        "Soybeans",
        &[],
        &[
            "soy", "soya", "soybean", "soybeans", "edamame", "tofu", "tempeh", "lecithin",
        ],
    ),
    CanonicalAllergen::new(
        "milk",
        "Milk",
        &[],
        &["milk", "dairy", "lactose", "cheese", "butter", "cream"],
    ),
    CanonicalAllergen::new(
        "tree_nuts",
        "Tree nuts",
        &[],
        &[
            "nut",
            "nuts",
            "almond",
            "almonds",
            "hazelnut",
            "hazelnuts",
            "walnut",
            "walnuts",
            "cashew",
            "cashews",
            "pecan",
            "pecans",
            "brazil nut",
            "brazil nuts",
            "pistachio",
            "pistachios",
            "macadamia",
            "macadamia nut",
        ],
    ),
    CanonicalAllergen::new(
        "celery",
        "Celery",
        &[],
        &["celery", "celeriac", "apium"],
    ),
    CanonicalAllergen::new(
        "mustard",
        "Mustard",
        &[],
        &[
            "mustard",
            "dijon",
            "wholegrain",
            "yellow mustard",
            "brown mustard",
        ],
    ),
    CanonicalAllergen::new(
        "sesame",
        "Sesame seeds",
        &[],
        &["sesame", "sesame seed", "sesame seeds", "tahini", "gomasio"],
    ),
    CanonicalAllergen::new(
        "sulphites",
        "Sulphur dioxide & sulphites",
        &[],
        &[
            "sulphite",
            "sulfite",
            "sulphites",
            "sulfites",
            "so2",
            "preservative",
            "e220",
            "e221",
            "e222",
            "e223",
            "e224",
            "e226",
            "e227",
            "e228",
        ],
    ),
    CanonicalAllergen::new(
        "lupin",
        "Lupin",
        &[],
        &["lupin", "lupine", "lupini", "lupin flour"],
    ),
    CanonicalAllergen::new(
        "molluscs",
        "Molluscs",
        &[],
        &[
            "mollusc", "molluscs", "mussel", "mussels", "oyster", "oysters", "clam", "octopus",
            "squid", "scallop", "snail",
        ],
    ),
    CanonicalAllergen::new(
        "vegan",
        "Not plant-based (vegan)",
        &[],
        &[
            "vegan",
            "not vegan",
            "non-vegan",
            "animal product",
            "animal-derived",
        ],
    ),
    CanonicalAllergen::new(
        "vegetarian",
        "Not plant-based (vegetarian)",
        &[],
        &[
            "vegetarian",
            "not vegetarian",
            "non-vegetarian",
            "meat",
            "seafood product",
        ],
    ),
];
