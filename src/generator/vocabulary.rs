//! Word lists for title placeholders and the built-in fallback pools.

/// Returns the word list for a placeholder key (without braces).
pub fn words(key: &str) -> Option<&'static [&'static str]> {
    let words: &'static [&'static str] = match key {
        "adjective" => ADJECTIVES,
        "location" => &[
            "Paris", "Tokyo", "New York", "London", "Rome", "Village", "City", "Island",
            "Mountain", "Coast",
        ],
        "place" => &[
            "Home", "Heart", "Dreams", "Time", "Life", "Love", "Hope", "Future", "Past", "Journey",
        ],
        "profession" => &[
            "Doctor's",
            "Teacher's",
            "Artist's",
            "Chef's",
            "Writer's",
            "Pilot's",
            "Detective's",
            "Lawyer's",
            "Engineer's",
            "Musician's",
        ],
        "season" => &["Spring", "Summer", "Fall", "Winter", "Christmas", "Holiday"],
        "emotion" => &[
            "Love",
            "Hope",
            "Joy",
            "Dreams",
            "Peace",
            "Happiness",
            "Wonder",
            "Magic",
            "Passion",
            "Serenity",
        ],
        "color" => &[
            "Red", "Blue", "Golden", "Silver", "White", "Black", "Green", "Purple", "Crimson",
            "Azure",
        ],
        "city" => &[
            "Paris",
            "Venice",
            "Prague",
            "Vienna",
            "Barcelona",
            "Florence",
            "Dublin",
            "Copenhagen",
            "Amsterdam",
            "Edinburgh",
        ],
        "object" => &[
            "Book", "Key", "Letter", "Photo", "Ring", "Map", "Box", "Diary", "Watch", "Mirror",
        ],
        "number" => &[
            "7", "10", "21", "30", "100", "Five", "Seven", "Ten", "Twelve", "Fifty",
        ],
        "skill" => &[
            "Leadership",
            "Communication",
            "Creativity",
            "Focus",
            "Confidence",
            "Resilience",
            "Innovation",
            "Success",
        ],
        "concept" => CONCEPTS,
        "achievement" => &[
            "Succeed",
            "Excel",
            "Win",
            "Thrive",
            "Grow",
            "Transform",
            "Achieve",
            "Overcome",
            "Master",
            "Conquer",
        ],
        "potential" => &[
            "Potential",
            "Power",
            "Strength",
            "Abilities",
            "Talents",
            "Gifts",
            "Energy",
            "Spirit",
            "Mind",
            "Heart",
        ],
        "limitation" => &[
            "Fear",
            "Doubt",
            "Limits",
            "Barriers",
            "Obstacles",
            "Challenges",
            "Problems",
            "Blocks",
            "Walls",
        ],
        "purpose" => &[
            "Purpose", "Calling", "Mission", "Path", "Destiny", "Vision", "Dream", "Goal",
            "Passion", "Way",
        ],
        "fear" => &[
            "Fear",
            "Anxiety",
            "Worry",
            "Stress",
            "Doubt",
            "Uncertainty",
            "Insecurity",
            "Overwhelm",
        ],
        "habit" => &[
            "Success",
            "Productivity",
            "Happiness",
            "Focus",
            "Energy",
            "Balance",
            "Mindfulness",
            "Excellence",
        ],
        "challenge" => &[
            "Adversity",
            "Obstacles",
            "Challenges",
            "Difficulties",
            "Problems",
            "Setbacks",
            "Struggles",
        ],
        "success" => &[
            "Success",
            "Achievement",
            "Excellence",
            "Mastery",
            "Victory",
            "Triumph",
            "Breakthrough",
        ],
        "area" => &[
            "Life",
            "Career",
            "Relationships",
            "Health",
            "Mindset",
            "Habits",
            "Goals",
            "Dreams",
        ],
        _ => return None,
    };
    Some(words)
}

pub const ADJECTIVES: &[&str] = &[
    "Amazing",
    "Ultimate",
    "Perfect",
    "Hidden",
    "Secret",
    "Powerful",
    "Complete",
    "Essential",
    "Modern",
    "Revolutionary",
];

pub const CONCEPTS: &[&str] = &[
    "Excellence",
    "Innovation",
    "Growth",
    "Change",
    "Success",
    "Freedom",
    "Power",
    "Wisdom",
    "Truth",
    "Discovery",
];

pub const DEFAULT_CHARACTERS: &[&str] = &["The protagonist"];

pub const DEFAULT_SETTINGS: &[&str] = &["Contemporary setting"];

pub const DEFAULT_CONFLICTS: &[&str] = &["Central challenge"];

pub const DEFAULT_OPENING_LINES: &[&str] = &[
    "It was a moment that would change everything.",
    "The journey began with a simple decision.",
    "Nobody could have predicted what happened next.",
    "The story starts where most stories end.",
    "This is not the story you think it is.",
    "Everything changed the moment they met.",
    "The secret had been hidden for too long.",
    "It was supposed to be an ordinary day.",
    "The letter arrived at the perfect time.",
    "The discovery would alter the course of history.",
];

pub const DEFAULT_THEMES: &[&str] = &[
    "Personal Growth",
    "Overcoming Challenges",
    "Love and Relationships",
    "Finding Purpose",
    "Courage and Bravery",
    "Family and Loyalty",
    "Hope and Perseverance",
    "Truth and Justice",
    "Redemption and Forgiveness",
    "Discovery and Adventure",
    "Transformation and Change",
    "Wisdom and Learning",
    "Freedom and Independence",
    "Unity and Cooperation",
    "Legacy and Heritage",
];

/// Premise used when a bag has neither concepts nor title patterns.
pub const DEFAULT_FICTION_CONCEPT: &str = "An unlikely hero facing an impossible choice";

/// Premise used when a non-fiction bag has neither concepts nor title patterns.
pub const DEFAULT_NON_FICTION_CONCEPT: &str = "A practical roadmap for lasting change.";
