use serde::Serialize;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Category every generated guide closes on.
pub const CLOSING_CATEGORY: &str = "Reflection & Legacy";

#[derive(Debug, Clone, Serialize)]
pub struct QuestionCategory {
    pub name: &'static str,
    pub questions: Vec<&'static str>,
}

/// Master interview question pool plus the two tables that steer selection:
/// archetype defaults and theme label to category.
#[derive(Debug)]
pub struct QuestionBank {
    categories: Vec<QuestionCategory>,
    archetype_defaults: Vec<(&'static str, Vec<&'static str>)>,
    themes: HashMap<&'static str, &'static str>,
}

impl QuestionBank {
    pub fn standard() -> Self {
        Self {
            categories: standard_categories(),
            archetype_defaults: standard_archetype_defaults(),
            themes: standard_theme_map().into_iter().collect(),
        }
    }

    pub fn shared() -> &'static Self {
        static BANK: OnceLock<QuestionBank> = OnceLock::new();
        BANK.get_or_init(Self::standard)
    }

    /// Builds a bank from caller-supplied tables, mostly useful for exercising
    /// the selector against partial data.
    pub fn from_parts(
        categories: Vec<QuestionCategory>,
        archetype_defaults: Vec<(&'static str, Vec<&'static str>)>,
        themes: Vec<(&'static str, &'static str)>,
    ) -> Self {
        Self {
            categories,
            archetype_defaults,
            themes: themes.into_iter().collect(),
        }
    }

    pub fn categories(&self) -> &[QuestionCategory] {
        &self.categories
    }

    pub fn category(&self, name: &str) -> Option<&QuestionCategory> {
        self.categories.iter().find(|category| category.name == name)
    }

    /// Unknown archetypes have no defaults rather than failing.
    pub fn default_categories(&self, archetype: &str) -> &[&'static str] {
        self.archetype_defaults
            .iter()
            .find(|(name, _)| *name == archetype)
            .map(|(_, categories)| categories.as_slice())
            .unwrap_or(&[])
    }

    pub fn category_for_theme(&self, label: &str) -> Option<&'static str> {
        self.themes.get(label).copied()
    }
}

fn standard_categories() -> Vec<QuestionCategory> {
    vec![
        QuestionCategory {
            name: "Childhood & Growing Up",
            questions: vec![
                "What is your earliest memory?",
                "Where did you grow up, and what was your neighborhood like?",
                "Describe the home you grew up in — what did it look like, smell like, sound like?",
                "Who were the most important people in your childhood?",
                "What were your favorite games, toys, or ways to spend time as a kid?",
                "What was school like for you? Did you have a favorite teacher?",
                "What got you in trouble as a kid?",
                "What was dinnertime like in your family?",
                "What holidays or traditions did your family celebrate, and how?",
                "Was there a moment in your childhood that changed the direction of your life?",
                "What was the best summer you remember as a kid?",
                "What did you want to be when you grew up?",
                "What were your parents like when you were young?",
                "What music, TV shows, or movies do you remember from growing up?",
                "What was the hardest thing about being a kid in that era?",
            ],
        },
        QuestionCategory {
            name: "Family & Relationships",
            questions: vec![
                "How did you meet your spouse or life partner?",
                "What was your wedding day like?",
                "What's the secret to a lasting relationship, in your experience?",
                "What was it like becoming a parent for the first time?",
                "What's a favorite memory with each of your children?",
                "How would you describe your parenting style?",
                "What traditions have you created with your own family?",
                "What do you admire most about your parents?",
                "Tell me about a family challenge you overcame together.",
                "What do you most want your children or grandchildren to know about you?",
                "Is there a family recipe, song, or saying that's been passed down?",
                "What has being a grandparent meant to you?",
                "Describe a perfect ordinary day with your family.",
                "What's the funniest thing that ever happened in your family?",
                "Who in your extended family had the biggest impact on you?",
            ],
        },
        QuestionCategory {
            name: "Career & Professional Life",
            questions: vec![
                "What was your very first job?",
                "How did you end up in the career or industry you spent your life in?",
                "Who was the most influential mentor in your professional life?",
                "What accomplishment are you most proud of professionally?",
                "Tell me about a time you failed at work and what you learned from it.",
                "How did your career change you as a person?",
                "What was the biggest risk you took professionally?",
                "What was the hardest decision you ever made at work?",
                "What leadership lesson took you the longest to learn?",
                "If you could give one piece of career advice to a young person, what would it be?",
                "How did you handle the balance between work and family?",
                "What do you think your colleagues would say about you?",
                "What industry changes did you witness during your career?",
                "Describe the moment you knew it was time to retire or move on.",
                "What legacy did you leave at the place you worked the longest?",
            ],
        },
        QuestionCategory {
            name: "Values & Life Lessons",
            questions: vec![
                "What values were you raised with that you still hold today?",
                "What's the most important lesson life has taught you?",
                "What do you know now that you wish you'd known at 20?",
                "What does 'success' mean to you — has that definition changed?",
                "What advice would you give about handling money?",
                "How do you define a good life?",
                "What's the best advice anyone ever gave you?",
                "What's a mistake you made that taught you something valuable?",
                "How do you handle disagreements or conflict?",
                "What does courage mean to you? When have you had to be courageous?",
                "How do you decide what's right when the answer isn't clear?",
                "What's worth fighting for?",
                "If you could write a letter to your younger self, what would it say?",
                "What keeps you going when life gets hard?",
                "What do you hope people learn from your life?",
            ],
        },
        QuestionCategory {
            name: "Faith & Spirituality",
            questions: vec![
                "How would you describe your relationship with faith or spirituality?",
                "Were you raised in a religious tradition? How did that shape you?",
                "Was there a defining moment in your spiritual life?",
                "How has your faith helped you through difficult times?",
                "Have you ever had doubts? How did you work through them?",
                "What spiritual practices are most meaningful to you?",
                "Is there a scripture, prayer, or saying that guides your life?",
                "Who has been a spiritual mentor or model for you?",
                "How has your faith changed or deepened over the years?",
                "What do you hope to pass down about your faith?",
                "Describe a moment you felt truly at peace.",
                "How does your faith community matter to you?",
            ],
        },
        QuestionCategory {
            name: "Military & Service",
            questions: vec![
                "Why did you join the military / enter service?",
                "What was basic training like?",
                "Where were you stationed, and what was life like there?",
                "Tell me about the people you served with — who stands out?",
                "What was your most meaningful experience during your service?",
                "How did military life affect your family?",
                "Was there a moment that tested everything you had?",
                "What did you learn about leadership in the military?",
                "How did you transition back to civilian life?",
                "Is there a fallen comrade you'd like to honor or remember?",
                "What do civilians most misunderstand about military life?",
                "How did your service shape the person you became?",
                "What's the funniest thing that happened during your service?",
                "If you could talk to a young person considering enlisting, what would you say?",
            ],
        },
        QuestionCategory {
            name: "Adventures & Experiences",
            questions: vec![
                "What's the greatest adventure you've ever had?",
                "Where is the most memorable place you've ever traveled?",
                "Tell me about a time you stepped completely outside your comfort zone.",
                "What's the most spontaneous thing you've ever done?",
                "Is there an experience that fundamentally changed how you see the world?",
                "What's a hobby or passion that has brought you the most joy?",
                "Describe a perfect day doing something you love.",
                "What's a risk you took that paid off — or didn't?",
                "Tell me about a time you were truly awestruck.",
                "What's on your bucket list that you still hope to do?",
            ],
        },
        QuestionCategory {
            name: "Health & Resilience",
            questions: vec![
                "Have you faced a serious health challenge? How did you cope?",
                "What kept you strong during the hardest period of your life?",
                "How did your family support you through a difficult time?",
                "What did you learn about yourself through adversity?",
                "Has a loss or hardship changed your perspective on life?",
                "What advice would you give someone going through something similar?",
                "How do you take care of your mental and emotional health?",
                "Who or what gave you hope when things looked dark?",
            ],
        },
        QuestionCategory {
            name: "Cultural Heritage & Traditions",
            questions: vec![
                "What is your cultural or ethnic heritage?",
                "What traditions from your culture are most important to you?",
                "Are there family customs you'd like to see continue?",
                "What language(s) were spoken in your home growing up?",
                "Tell me about a food or recipe that connects you to your heritage.",
                "What cultural values were instilled in you?",
                "How has your heritage shaped your identity?",
                "Is there a family history or origin story that's been passed down?",
            ],
        },
        QuestionCategory {
            name: CLOSING_CATEGORY,
            questions: vec![
                "When you look back on your life, what are you most grateful for?",
                "What are you most proud of?",
                "Is there anything you wish you'd done differently?",
                "What do you want people to remember about you?",
                "If you could live one day over again, which would it be and why?",
                "What brings you the most joy right now?",
                "What does the word 'legacy' mean to you?",
                "What message would you like to leave for future generations?",
                "How would you like to be remembered by those who knew you best?",
                "If you had one more thing to say to the people you love, what would it be?",
            ],
        },
    ]
}

fn standard_archetype_defaults() -> Vec<(&'static str, Vec<&'static str>)> {
    vec![
        (
            "Full Life Story",
            vec![
                "Childhood & Growing Up",
                "Family & Relationships",
                "Career & Professional Life",
                "Values & Life Lessons",
                "Adventures & Experiences",
                CLOSING_CATEGORY,
            ],
        ),
        (
            "Words of Wisdom",
            vec!["Values & Life Lessons", CLOSING_CATEGORY],
        ),
        (
            "Growing Up",
            vec!["Childhood & Growing Up", "Cultural Heritage & Traditions"],
        ),
        (
            "Professional Life: My Career",
            vec!["Career & Professional Life", "Values & Life Lessons"],
        ),
        (
            "Love & Family",
            vec!["Family & Relationships", CLOSING_CATEGORY],
        ),
        (
            "Military & Service",
            vec![
                "Military & Service",
                "Values & Life Lessons",
                CLOSING_CATEGORY,
            ],
        ),
        (
            "Faith & Spiritual Journey",
            vec![
                "Faith & Spirituality",
                "Values & Life Lessons",
                CLOSING_CATEGORY,
            ],
        ),
        (
            "A Specific Chapter",
            vec![
                "Adventures & Experiences",
                "Health & Resilience",
                CLOSING_CATEGORY,
            ],
        ),
    ]
}

fn standard_theme_map() -> Vec<(&'static str, &'static str)> {
    vec![
        // Full Life Story
        ("Family & Relationships", "Family & Relationships"),
        ("Career & Professional Life", "Career & Professional Life"),
        ("Education & Learning", "Childhood & Growing Up"),
        ("Travel & Adventures", "Adventures & Experiences"),
        ("Faith & Spirituality", "Faith & Spirituality"),
        ("Health & Overcoming Challenges", "Health & Resilience"),
        ("Hobbies & Passions", "Adventures & Experiences"),
        ("Community & Volunteering", "Cultural Heritage & Traditions"),
        ("Military Service", "Military & Service"),
        ("Cultural Heritage & Traditions", "Cultural Heritage & Traditions"),
        // Words of Wisdom
        ("Life lessons & general advice", "Values & Life Lessons"),
        ("Relationship & marriage wisdom", "Family & Relationships"),
        ("Parenting insights", "Family & Relationships"),
        ("Career & professional guidance", "Career & Professional Life"),
        ("Financial lessons learned", "Values & Life Lessons"),
        ("Health & wellness advice", "Health & Resilience"),
        ("Faith & spiritual guidance", "Faith & Spirituality"),
        ("Dealing with adversity & resilience", "Health & Resilience"),
        ("Happiness & finding purpose", "Values & Life Lessons"),
        ("Mistakes I learned from", "Values & Life Lessons"),
        // Growing Up
        ("Family life & home", "Family & Relationships"),
        ("Neighborhood & community", "Cultural Heritage & Traditions"),
        ("School days & friendships", "Childhood & Growing Up"),
        ("Cultural traditions & holidays", "Cultural Heritage & Traditions"),
        ("Pivotal moments & turning points", "Values & Life Lessons"),
        ("Games, toys & entertainment of the era", "Childhood & Growing Up"),
        ("Food, meals & family recipes", "Cultural Heritage & Traditions"),
        ("Summer vacations & adventures", "Adventures & Experiences"),
        ("Challenges & how I overcame them", "Health & Resilience"),
        ("The historical era I grew up in", "Cultural Heritage & Traditions"),
        // Professional Life
        ("How I got started & early career", "Career & Professional Life"),
        ("Mentors & people who shaped my path", "Career & Professional Life"),
        ("Major accomplishments & proud moments", "Career & Professional Life"),
        ("Failures, setbacks & what I learned", "Health & Resilience"),
        ("Leadership philosophy & management style", "Career & Professional Life"),
        ("Industry changes I witnessed or drove", "Career & Professional Life"),
        ("Work-life balance & sacrifices", "Family & Relationships"),
        ("Advice for the next generation in my field", "Values & Life Lessons"),
        ("The legacy I left at my workplace", CLOSING_CATEGORY),
        ("Transition to retirement", CLOSING_CATEGORY),
        // Love & Family: relationship focus
        ("My love story / marriage", "Family & Relationships"),
        ("Being a parent", "Family & Relationships"),
        ("Being a grandparent", "Family & Relationships"),
        ("My parents & the family I came from", "Family & Relationships"),
        ("Siblings & extended family", "Family & Relationships"),
        ("Lifelong friendships", "Family & Relationships"),
        ("Chosen family & community bonds", "Cultural Heritage & Traditions"),
        // Love & Family: family themes
        ("How we met / how it all began", "Family & Relationships"),
        ("Traditions & rituals we built together", "Cultural Heritage & Traditions"),
        ("Challenges we faced & overcame", "Health & Resilience"),
        ("Everyday moments that defined us", "Family & Relationships"),
        ("Lessons I learned about love & commitment", "Values & Life Lessons"),
        ("Funny stories & inside jokes", "Family & Relationships"),
        ("What I want them to know", CLOSING_CATEGORY),
        // Military & Service
        ("Basic training & early days", "Military & Service"),
        ("Deployments & duty stations", "Military & Service"),
        ("Combat experiences", "Military & Service"),
        ("Brotherhood & camaraderie", "Military & Service"),
        ("Leadership & lessons learned", "Values & Life Lessons"),
        ("Impact on family & home life", "Family & Relationships"),
        ("Transition to civilian life", "Military & Service"),
        ("How service shaped who I am", CLOSING_CATEGORY),
        ("Honoring fallen comrades", "Military & Service"),
        ("Funny stories & lighter moments", "Military & Service"),
        // Faith & Spiritual Journey
        ("Foundational beliefs & values", "Faith & Spirituality"),
        ("Key moments of spiritual growth", "Faith & Spirituality"),
        ("How faith carried me through hard times", "Faith & Spirituality"),
        ("Community & fellowship", "Cultural Heritage & Traditions"),
        ("Doubts, questions & honest wrestling", "Faith & Spirituality"),
        ("Prayers that were answered", "Faith & Spirituality"),
        ("Spiritual mentors & teachers", "Faith & Spirituality"),
        ("Faith traditions I want to pass down", "Faith & Spirituality"),
        ("How my faith evolved over time", "Faith & Spirituality"),
        // A Specific Chapter
        ("It changed who I am", CLOSING_CATEGORY),
        ("It's a story my family should know", "Family & Relationships"),
        ("It involved incredible people", "Family & Relationships"),
        ("It was an adventure or unique experience", "Adventures & Experiences"),
        ("I overcame something difficult", "Health & Resilience"),
        ("It shaped my values or beliefs", "Values & Life Lessons"),
        ("It's a piece of history", "Cultural Heritage & Traditions"),
        ("It's simply a great story", "Adventures & Experiences"),
    ]
}
