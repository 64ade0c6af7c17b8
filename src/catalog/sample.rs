//! The content the site ships with.

use crate::game::{
    AgeRating, GameDetails, GameRecord, ImpactCategory, ImpactItem, ImpactLevel, Screenshot,
    PARENTAL_GUIDANCE_CATEGORY,
};
use crate::guide::{Faq, Guide};

const IMAGE_BASE: &str = "https://images.unsplash.com";

fn image(photo: &str, size: &str) -> String {
    format!("{}/{}?q=80&{}&auto=format&fit=crop", IMAGE_BASE, photo, size)
}

fn card_image(photo: &str) -> String {
    image(photo, "w=400")
}

fn screenshot(id: &str, photo: &str, alt_text: &str) -> Screenshot {
    Screenshot::new(id, image(photo, "w=1280&h=720"), alt_text)
}

pub(crate) fn games() -> Vec<GameRecord> {
    use AgeRating::*;

    vec![
        GameRecord::new(
            "game1",
            "Math Blasters Adventure",
            card_image("photo-1511512578047-dfb367046420"),
            Everyone,
            "Learn math while exploring exciting worlds!",
            "/games/math-blasters",
        )
        .with_genre("Educational")
        .with_tags(vec!["learning", "math"]),
        GameRecord::new(
            "game2",
            "Eco Warriors",
            card_image("photo-1612287230202-956de3e90dea"),
            EveryoneTenPlus,
            "Solve environmental puzzles and save the planet.",
            "/games/eco-warriors",
        )
        .with_genre("Puzzle")
        .with_tags(vec!["environment", "problem-solving"]),
        GameRecord::new(
            "game3",
            "Cosmic Coders",
            card_image("photo-1542773998-9325f0a098d7"),
            Teen,
            "Code your way through space missions.",
            "/games/cosmic-coders",
        )
        .with_genre("Educational")
        .with_tags(vec!["coding", "sci-fi", "learning"]),
        GameRecord::new(
            "game4",
            "Kingdoms & Chronicles",
            card_image("photo-1593305842310-9beeef589989"),
            Mature,
            "Epic RPG with mature themes and complex storyline.",
            "/games/kingdoms-chronicles",
        )
        .with_genre("RPG")
        .with_tags(vec!["mature", "story-rich", "violence"]),
        GameRecord::new(
            "game5",
            "Art Studio Deluxe",
            card_image("photo-1531297484001-80022131c5a1"),
            Everyone,
            "Unleash your creativity with digital art tools.",
            "/games/art-studio",
        )
        .with_genre("Creative")
        .with_tags(vec!["art", "creativity"]),
        GameRecord::new(
            "game6",
            "Strategy Masters",
            card_image("photo-1600097246039-209135769756"),
            Teen,
            "Lead your armies to victory in this RTS.",
            "/games/strategy-masters",
        )
        .with_genre("Strategy")
        .with_tags(vec!["rts", "tactical"]),
    ]
}

pub(crate) fn details() -> Vec<GameDetails> {
    use ImpactLevel::*;

    vec![
        GameDetails {
            id: "chronicles-of-valor".to_owned(),
            title: "Chronicles of Valor".to_owned(),
            age_rating: AgeRating::Mature,
            description: "Chronicles of Valor is an epic open-world RPG set in the war-torn land of \
                Eldoria. Players embark on a perilous journey to uncover ancient secrets and forge \
                their destiny. The game features a rich narrative, complex characters, and \
                challenging moral choices. Be warned, it explores mature themes including \
                significant character death, grief, and the consequences of violence. Player \
                choices can lead to vastly different outcomes, impacting the world and its \
                inhabitants."
                .to_owned(),
            screenshots: vec![
                screenshot("ss1", "photo-1593305842310-9beeef589989", "Gameplay Screenshot 1"),
                screenshot("ss2", "photo-1519669556878-63bd5502a65b", "Gameplay Screenshot 2"),
                screenshot("ss3", "photo-1580327354310-c779520867f0", "Gameplay Screenshot 3"),
            ],
            impact: vec![
                ImpactCategory::new(
                    "content_warnings",
                    "Key Content Warnings",
                    vec![
                        ImpactItem::new(
                            "violence",
                            "Intense Violence",
                            "Depictions of graphic combat, blood, and gore.",
                            HighConcern,
                        ),
                        ImpactItem::new(
                            "death_themes",
                            "Themes of Death & Loss",
                            "Game centrally features character death, grief, and moral dilemmas \
                             related to loss. Not suitable for all players.",
                            HighConcern,
                        )
                        .with_details(vec![
                            "Multiple main character deaths.",
                            "Exploration of bereavement processes.",
                        ]),
                        ImpactItem::new(
                            "language",
                            "Strong Language",
                            "Frequent use of strong profanity.",
                            Concern,
                        ),
                    ],
                ),
                ImpactCategory::new(
                    "positive_aspects",
                    "Positive Aspects",
                    vec![
                        ImpactItem::new(
                            "storytelling",
                            "Rich Storytelling",
                            "Complex narrative with deep character development.",
                            Positive,
                        ),
                        ImpactItem::new(
                            "problem_solving",
                            "Strategic Thinking",
                            "Requires players to solve complex puzzles and make strategic decisions.",
                            Positive,
                        ),
                    ],
                ),
                ImpactCategory::new(
                    PARENTAL_GUIDANCE_CATEGORY,
                    "Parental Guidance & Discussion",
                    vec![ImpactItem::new(
                        "discussion_death",
                        "Discussing Death Themes",
                        "This game provides an opportunity to discuss difficult topics like loss \
                         and morality if the child is mature enough. Consider co-playing or \
                         discussing scenes afterwards.",
                        Informational,
                    )],
                ),
            ],
            system_requirements: "Minimum: OS: Windows 10, Processor: Intel Core i5, Memory: 8 GB \
                RAM, Graphics: NVIDIA GeForce GTX 970, Storage: 50 GB available space."
                .to_owned(),
            user_reviews_summary: "Mixed. Praised for story, criticized for difficulty and dark \
                themes. (7/10)"
                .to_owned(),
        },
        GameDetails {
            id: "math-blasters".to_owned(),
            title: "Math Blasters Adventure".to_owned(),
            age_rating: AgeRating::Everyone,
            description: "Join the Math Blasters on an exciting adventure across the galaxy! Solve \
                math puzzles to power your spaceship, defeat alien Zurgs, and rescue friendly \
                creatures. This game makes learning arithmetic, fractions, and basic algebra fun \
                and engaging for young learners."
                .to_owned(),
            screenshots: vec![
                screenshot("ss_math1", "photo-1509869175624-9457b0bc1726", "Math Blasters Gameplay 1"),
                screenshot("ss_math2", "photo-1639755903909-52baca535590", "Math Blasters Gameplay 2"),
            ],
            impact: vec![
                ImpactCategory::new(
                    "educational_value",
                    "Educational Value",
                    vec![
                        ImpactItem::new(
                            "arithmetic",
                            "Arithmetic Skills",
                            "Reinforces addition, subtraction, multiplication, and division.",
                            Positive,
                        ),
                        ImpactItem::new(
                            "problem_solving",
                            "Logical Thinking",
                            "Puzzles encourage problem-solving and critical thought.",
                            Positive,
                        ),
                    ],
                ),
                ImpactCategory::new(
                    "positive_aspects",
                    "Other Positive Aspects",
                    vec![ImpactItem::new(
                        "engagement",
                        "Engaging Gameplay",
                        "Fun characters and story keep children motivated.",
                        Positive,
                    )],
                ),
            ],
            system_requirements: "Minimum: OS: Windows/Mac/Linux, Processor: 1GHz, Memory: 1 GB \
                RAM, Graphics: Any, Storage: 500 MB available space."
                .to_owned(),
            user_reviews_summary: "Overwhelmingly Positive. Parents and kids love it! (9/10)"
                .to_owned(),
        },
    ]
}

pub(crate) fn guides() -> Vec<Guide> {
    vec![
        Guide::new(
            "understanding-ratings",
            "Understanding Game Ratings (ESRB, PEGI)",
            "Demystify video game age ratings like ESRB (E, E10+, T, M, AO) and PEGI (3, 7, 12, \
             16, 18). Learn what content descriptors mean and how to use ratings as a first step \
             in choosing appropriate games.",
            "Detailed explanation of ESRB ratings (Everyone, Everyone 10+, Teen, Mature, Adults \
             Only) and PEGI ratings. Covers common content descriptors like Violence, Language, \
             Nudity, Drug Reference, etc. Emphasizes that ratings are a guideline and parental \
             discretion is key. Discusses regional differences and where to find rating \
             information.",
        ),
        Guide::new(
            "positive-impacts",
            "The Positive Impacts of Gaming",
            "Explore the benefits games can offer, from developing problem-solving skills and \
             creativity to fostering social connections and improving reaction times. Not all \
             screen time is equal!",
            "Explores cognitive benefits (problem-solving, spatial reasoning, memory), creative \
             benefits (sandbox games, modding), social benefits (cooperative play, online \
             communities), and emotional benefits (stress relief, sense of accomplishment). \
             Provides examples of game genres that excel in these areas.",
        ),
        Guide::new(
            "managing-screen-time",
            "Tips for Managing Screen Time Effectively",
            "Learn practical strategies for setting healthy screen time limits, encouraging \
             breaks, and balancing gaming with other activities. Includes tips for using \
             parental controls.",
            "Strategies for setting limits (time-based, activity-based), creating family media \
             plans, importance of physical activity and offline hobbies. How to use built-in \
             parental controls on consoles and PCs. Signs of problematic gaming and when to seek \
             help.",
        ),
    ]
}

pub(crate) fn faqs() -> Vec<Faq> {
    vec![
        Faq::new(
            "faq1",
            "Are all 'M' rated games bad for teens?",
            "'M' (Mature 17+) rated games contain content that may be suitable for persons ages \
             17 and older. This can include intense violence, blood and gore, sexual content \
             and/or strong language. It's crucial to look at specific content descriptors and \
             reviews, not just the letter rating, and consider your individual child's maturity.",
        ),
        Faq::new(
            "faq2",
            "How can I find educational games?",
            "Look for games labeled 'Educational' or with tags like 'Learning'. Many puzzle, \
             simulation, and strategy games also have strong educational components. Read \
             reviews and check descriptions for mentions of skills developed (e.g., math, \
             reading, coding).",
        ),
        Faq::new(
            "faq3",
            "What if my child only wants to play popular, violent games?",
            "Open communication is key. Discuss why they're interested, what they enjoy, and \
             your concerns. Explore alternatives together, try co-playing to understand the \
             game, and set clear boundaries. Sometimes, finding less violent games in the same \
             genre can be a good compromise.",
        ),
    ]
}
