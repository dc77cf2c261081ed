use super::domain::{AnswerKind, CatalogError, ChoiceOption, LegacyArchetype, ScopingQuestion};
use serde::Serialize;
use std::sync::OnceLock;

/// Fixed vocabulary offered during scoping: archetypes and their follow-up
/// questions, audiences, delivery formats, and timelines.
#[derive(Debug, Serialize)]
pub struct LegacyCatalog {
    archetypes: Vec<LegacyArchetype>,
    audiences: Vec<ChoiceOption>,
    delivery_formats: Vec<ChoiceOption>,
    timelines: Vec<&'static str>,
    subject_relationships: Vec<&'static str>,
}

impl LegacyCatalog {
    pub fn standard() -> Self {
        Self {
            archetypes: standard_archetypes(),
            audiences: standard_audiences(),
            delivery_formats: standard_delivery_formats(),
            timelines: vec![
                "I'd like to start right away",
                "Within the next month",
                "Within the next few months",
                "No rush — I'm just exploring for now",
            ],
            subject_relationships: vec![
                "This is my own story",
                "I'm capturing a parent's story",
                "I'm capturing a grandparent's story",
                "I'm capturing a spouse/partner's story",
                "I'm capturing a friend's story",
                "I'm capturing someone else's story",
            ],
        }
    }

    /// Process-wide instance built on first use and never mutated.
    pub fn shared() -> &'static Self {
        static CATALOG: OnceLock<LegacyCatalog> = OnceLock::new();
        CATALOG.get_or_init(Self::standard)
    }

    pub fn list_archetypes(&self) -> &[LegacyArchetype] {
        &self.archetypes
    }

    pub fn get_archetype(&self, name: &str) -> Result<&LegacyArchetype, CatalogError> {
        self.archetypes
            .iter()
            .find(|archetype| archetype.name == name)
            .ok_or_else(|| CatalogError::NotFound {
                name: name.to_string(),
            })
    }

    pub fn audience_options(&self) -> &[ChoiceOption] {
        &self.audiences
    }

    pub fn delivery_formats(&self) -> &[ChoiceOption] {
        &self.delivery_formats
    }

    pub fn timeline_options(&self) -> &[&'static str] {
        &self.timelines
    }

    pub fn subject_relationships(&self) -> &[&'static str] {
        &self.subject_relationships
    }
}

fn single(
    key: &'static str,
    prompt: &'static str,
    options: Vec<&'static str>,
) -> ScopingQuestion {
    ScopingQuestion {
        key,
        prompt,
        kind: AnswerKind::SingleChoice,
        options,
        placeholder: None,
    }
}

fn multi(key: &'static str, prompt: &'static str, options: Vec<&'static str>) -> ScopingQuestion {
    ScopingQuestion {
        key,
        prompt,
        kind: AnswerKind::MultiChoice,
        options,
        placeholder: None,
    }
}

fn free_text(
    key: &'static str,
    prompt: &'static str,
    placeholder: &'static str,
) -> ScopingQuestion {
    ScopingQuestion {
        key,
        prompt,
        kind: AnswerKind::FreeText,
        options: Vec::new(),
        placeholder: Some(placeholder),
    }
}

fn standard_archetypes() -> Vec<LegacyArchetype> {
    vec![
        LegacyArchetype {
            name: "Full Life Story",
            icon: "📖",
            description: "A comprehensive journey through your entire life — from earliest memories to today. This is the most complete legacy, capturing every chapter.",
            questions: vec![
                single(
                    "time_depth",
                    "How far back would you like to go?",
                    vec![
                        "As far back as I can remember",
                        "Starting from my teenage years",
                        "Starting from adulthood",
                    ],
                ),
                multi(
                    "themes",
                    "Which life themes are most important to include? (Select all that apply)",
                    vec![
                        "Family & Relationships",
                        "Career & Professional Life",
                        "Education & Learning",
                        "Travel & Adventures",
                        "Faith & Spirituality",
                        "Health & Overcoming Challenges",
                        "Hobbies & Passions",
                        "Community & Volunteering",
                        "Military Service",
                        "Cultural Heritage & Traditions",
                    ],
                ),
                single(
                    "tone",
                    "What tone or feel should the story have?",
                    vec![
                        "Warm and conversational — like sitting on the porch together",
                        "Reflective and thoughtful — lessons learned along the way",
                        "Celebratory and uplifting — highlighting the best moments",
                        "Honest and raw — the full truth, good and hard",
                    ],
                ),
                single(
                    "estimated_length",
                    "How extensive should the final piece be?",
                    vec![
                        "A concise overview (10-20 pages / 30-60 min of audio)",
                        "A detailed narrative (50-100 pages / 2-4 hours of audio)",
                        "A comprehensive memoir (100+ pages / 5+ hours of audio)",
                    ],
                ),
            ],
        },
        LegacyArchetype {
            name: "Words of Wisdom",
            icon: "💡",
            description: "The life lessons, values, and advice you want to pass down. What do you know now that you wish you'd known sooner?",
            questions: vec![
                multi(
                    "wisdom_topics",
                    "What areas of wisdom would you like to share? (Select all that apply)",
                    vec![
                        "Life lessons & general advice",
                        "Relationship & marriage wisdom",
                        "Parenting insights",
                        "Career & professional guidance",
                        "Financial lessons learned",
                        "Health & wellness advice",
                        "Faith & spiritual guidance",
                        "Dealing with adversity & resilience",
                        "Happiness & finding purpose",
                        "Mistakes I learned from",
                    ],
                ),
                single(
                    "format_pref",
                    "How would you like the wisdom presented?",
                    vec![
                        "Short, memorable sayings and principles",
                        "Stories that illustrate each lesson",
                        "Letters addressed to specific people",
                        "A mix of stories, advice, and reflections",
                    ],
                ),
                single(
                    "tone",
                    "What tone feels right?",
                    vec![
                        "Gentle and encouraging",
                        "Direct and no-nonsense",
                        "Humorous and lighthearted",
                        "Deeply personal and heartfelt",
                    ],
                ),
            ],
        },
        LegacyArchetype {
            name: "Growing Up",
            icon: "🌱",
            description: "The story of your childhood and formative years — the people, places, and moments that shaped who you became.",
            questions: vec![
                single(
                    "era_focus",
                    "Which period would you like to focus on most?",
                    vec![
                        "Early childhood (birth to age 10)",
                        "Pre-teen and teenage years (10-18)",
                        "The full span of growing up (birth through leaving home)",
                    ],
                ),
                multi(
                    "growing_up_themes",
                    "What aspects of growing up are most important to capture? (Select all that apply)",
                    vec![
                        "Family life & home",
                        "Neighborhood & community",
                        "School days & friendships",
                        "Cultural traditions & holidays",
                        "Pivotal moments & turning points",
                        "Games, toys & entertainment of the era",
                        "Food, meals & family recipes",
                        "Summer vacations & adventures",
                        "Challenges & how I overcame them",
                        "The historical era I grew up in",
                    ],
                ),
                single(
                    "setting_detail",
                    "How important is it to paint a picture of the time and place?",
                    vec![
                        "Very important — I want readers to feel like they're there",
                        "Somewhat — mention key details but focus on the stories",
                        "Not very — the stories and people matter most",
                    ],
                ),
            ],
        },
        LegacyArchetype {
            name: "Professional Life: My Career",
            icon: "💼",
            description: "Your professional journey — the jobs, mentors, breakthroughs, and lessons from your working life.",
            questions: vec![
                single(
                    "career_scope",
                    "What part of your career would you like to focus on?",
                    vec![
                        "My entire career arc, start to finish",
                        "A specific role or company that defined me",
                        "A particular industry or field I worked in",
                        "My entrepreneurial journey / business I built",
                    ],
                ),
                multi(
                    "career_themes",
                    "Which professional themes matter most? (Select all that apply)",
                    vec![
                        "How I got started & early career",
                        "Mentors & people who shaped my path",
                        "Major accomplishments & proud moments",
                        "Failures, setbacks & what I learned",
                        "Leadership philosophy & management style",
                        "Industry changes I witnessed or drove",
                        "Work-life balance & sacrifices",
                        "Advice for the next generation in my field",
                        "The legacy I left at my workplace",
                        "Transition to retirement",
                    ],
                ),
                single(
                    "detail_level",
                    "How technical or detailed should the career story be?",
                    vec![
                        "Keep it accessible — anyone should be able to enjoy it",
                        "Some industry detail — for people familiar with my field",
                        "In-depth — a record for professionals and colleagues",
                    ],
                ),
            ],
        },
        LegacyArchetype {
            name: "Love & Family",
            icon: "❤️",
            description: "The story of your most important relationships — your partner, your children, your family bonds.",
            questions: vec![
                multi(
                    "relationship_focus",
                    "Which relationships would you like to focus on? (Select all that apply)",
                    vec![
                        "My love story / marriage",
                        "Being a parent",
                        "Being a grandparent",
                        "My parents & the family I came from",
                        "Siblings & extended family",
                        "Lifelong friendships",
                        "Chosen family & community bonds",
                    ],
                ),
                multi(
                    "family_themes",
                    "What aspects of these relationships matter most? (Select all that apply)",
                    vec![
                        "How we met / how it all began",
                        "Traditions & rituals we built together",
                        "Challenges we faced & overcame",
                        "Everyday moments that defined us",
                        "Lessons I learned about love & commitment",
                        "Funny stories & inside jokes",
                        "What I want them to know",
                    ],
                ),
                single(
                    "tone",
                    "What tone feels right for these stories?",
                    vec![
                        "Romantic and sentimental",
                        "Warm and down-to-earth",
                        "Funny and affectionate",
                        "Deeply honest — the real story",
                    ],
                ),
            ],
        },
        LegacyArchetype {
            name: "Military & Service",
            icon: "🎖️",
            description: "Your time in uniform — the service, sacrifice, camaraderie, and experiences that shaped you.",
            questions: vec![
                free_text(
                    "service_scope",
                    "What branch and era of service?",
                    "e.g., US Army, 1968-1972 / Navy, 1990-2010",
                ),
                multi(
                    "service_themes",
                    "Which aspects of your service are most important to capture? (Select all that apply)",
                    vec![
                        "Basic training & early days",
                        "Deployments & duty stations",
                        "Combat experiences",
                        "Brotherhood & camaraderie",
                        "Leadership & lessons learned",
                        "Impact on family & home life",
                        "Transition to civilian life",
                        "How service shaped who I am",
                        "Honoring fallen comrades",
                        "Funny stories & lighter moments",
                    ],
                ),
                single(
                    "sensitivity",
                    "Are there aspects of your service you'd prefer to keep private?",
                    vec![
                        "I'm an open book — capture it all",
                        "Some topics are off-limits — I'll let you know as we go",
                        "I'd like to focus on the positive and skip the difficult parts",
                    ],
                ),
            ],
        },
        LegacyArchetype {
            name: "Faith & Spiritual Journey",
            icon: "🙏",
            description: "Your spiritual path — how faith has guided, challenged, and sustained you through life.",
            questions: vec![
                single(
                    "faith_scope",
                    "What best describes your spiritual journey?",
                    vec![
                        "Lifelong faith in one tradition",
                        "A journey across different beliefs or denominations",
                        "Coming to faith later in life",
                        "A spiritual but not religious path",
                        "A complex relationship with faith",
                    ],
                ),
                multi(
                    "faith_themes",
                    "What aspects of your faith journey matter most? (Select all that apply)",
                    vec![
                        "Foundational beliefs & values",
                        "Key moments of spiritual growth",
                        "How faith carried me through hard times",
                        "Community & fellowship",
                        "Doubts, questions & honest wrestling",
                        "Prayers that were answered",
                        "Spiritual mentors & teachers",
                        "Faith traditions I want to pass down",
                        "How my faith evolved over time",
                    ],
                ),
            ],
        },
        LegacyArchetype {
            name: "A Specific Chapter",
            icon: "📌",
            description: "One particular period, event, or experience you want to preserve in detail — a move, an adventure, a challenge overcome.",
            questions: vec![
                free_text(
                    "chapter_description",
                    "Briefly describe the chapter or experience you want to capture:",
                    "e.g., The year we lived in Italy, My battle with cancer, Starting my business from scratch",
                ),
                single(
                    "chapter_timeframe",
                    "Roughly how long did this chapter span?",
                    vec![
                        "A single event or moment",
                        "Days to weeks",
                        "Months",
                        "A year or two",
                        "Several years",
                    ],
                ),
                multi(
                    "chapter_themes",
                    "What makes this chapter worth preserving? (Select all that apply)",
                    vec![
                        "It changed who I am",
                        "It's a story my family should know",
                        "It involved incredible people",
                        "It was an adventure or unique experience",
                        "I overcame something difficult",
                        "It shaped my values or beliefs",
                        "It's a piece of history",
                        "It's simply a great story",
                    ],
                ),
            ],
        },
    ]
}

fn standard_audiences() -> Vec<ChoiceOption> {
    vec![
        ChoiceOption {
            label: "My Children",
            icon: "👶",
            description: "Stories and lessons for your sons and daughters",
        },
        ChoiceOption {
            label: "My Grandchildren",
            icon: "👧",
            description: "Connecting generations — so they know where they come from",
        },
        ChoiceOption {
            label: "Future Generations",
            icon: "🌳",
            description: "A lasting record for descendants you may never meet",
        },
        ChoiceOption {
            label: "My Spouse / Partner",
            icon: "💑",
            description: "A gift of memories and love for your life partner",
        },
        ChoiceOption {
            label: "Extended Family",
            icon: "👨‍👩‍👧‍👦",
            description: "Siblings, nieces, nephews, cousins — the wider family",
        },
        ChoiceOption {
            label: "Friends & Community",
            icon: "🤝",
            description: "People beyond family who are part of your story",
        },
        ChoiceOption {
            label: "Professional Colleagues",
            icon: "🏢",
            description: "Mentees, coworkers, and people in your industry",
        },
        ChoiceOption {
            label: "The General Public",
            icon: "🌍",
            description: "Your story deserves to be shared widely",
        },
        ChoiceOption {
            label: "Myself",
            icon: "🪞",
            description: "A personal reflection — capturing your story for your own sake",
        },
    ]
}

fn standard_delivery_formats() -> Vec<ChoiceOption> {
    vec![
        ChoiceOption {
            label: "Written Book / Memoir",
            icon: "📕",
            description: "A printed or digital book — a classic, lasting keepsake",
        },
        ChoiceOption {
            label: "Audio Recording",
            icon: "🎙️",
            description: "Stories told in your own voice — intimate and personal",
        },
        ChoiceOption {
            label: "Video Documentary",
            icon: "🎬",
            description: "Visual storytelling with interviews and imagery",
        },
        ChoiceOption {
            label: "Digital Archive",
            icon: "💻",
            description: "An interactive digital collection — stories, photos, and documents",
        },
        ChoiceOption {
            label: "Scrapbook / Photo Essay",
            icon: "📸",
            description: "A visual journey pairing photos with narrative",
        },
        ChoiceOption {
            label: "Letters Collection",
            icon: "✉️",
            description: "Personal letters to specific people — to be read now or later",
        },
        ChoiceOption {
            label: "Not sure yet",
            icon: "🤔",
            description: "We'll help you decide the best format as we go",
        },
    ]
}
