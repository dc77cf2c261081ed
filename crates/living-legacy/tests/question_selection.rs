use living_legacy::legacy::{
    AnswerKind, LegacyCatalog, ProjectScope, QuestionBank, QuestionSelector, ScopingAnswer,
    CLOSING_CATEGORY,
};

fn names(scope: &ProjectScope) -> Vec<String> {
    QuestionSelector::standard()
        .select(scope)
        .category_names()
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[test]
fn faith_journey_without_answers_uses_defaults() {
    let scope = ProjectScope::new("Faith & Spiritual Journey");

    assert_eq!(
        names(&scope),
        vec![
            "Faith & Spirituality",
            "Values & Life Lessons",
            "Reflection & Legacy"
        ]
    );
}

#[test]
fn selection_is_deterministic() {
    let scope = ProjectScope::new("Full Life Story").with_answer(
        "themes",
        ScopingAnswer::selections(["Military Service", "Faith & Spirituality"]),
    );
    let selector = QuestionSelector::standard();

    let first = selector.select(&scope);
    for _ in 0..5 {
        assert_eq!(selector.select(&scope), first);
    }
}

#[test]
fn closing_category_is_last_exactly_once_for_every_archetype() {
    let catalog = LegacyCatalog::standard();
    let selector = QuestionSelector::standard();

    for archetype in catalog.list_archetypes() {
        let mut scope = ProjectScope::new(archetype.name);
        for question in &archetype.questions {
            let answer = match question.kind {
                AnswerKind::MultiChoice => ScopingAnswer::selections(question.options.clone()),
                AnswerKind::SingleChoice => match question.options.first() {
                    Some(first) => ScopingAnswer::text(*first),
                    None => continue,
                },
                AnswerKind::FreeText => ScopingAnswer::text("Reflection & Legacy"),
            };
            scope = scope.with_answer(question.key, answer);
        }

        let selection = selector.select(&scope);
        let categories = selection.category_names();
        assert_eq!(
            categories.last(),
            Some(&CLOSING_CATEGORY),
            "{} does not close with reflection",
            archetype.name
        );
        assert_eq!(
            categories
                .iter()
                .filter(|name| **name == CLOSING_CATEGORY)
                .count(),
            1,
            "{} repeats the closing category",
            archetype.name
        );
    }
}

#[test]
fn closing_default_moves_behind_theme_additions() {
    let scope = ProjectScope::new("Love & Family").with_answer(
        "family_themes",
        ScopingAnswer::selections([
            "Traditions & rituals we built together",
            "Challenges we faced & overcame",
        ]),
    );

    assert_eq!(
        names(&scope),
        vec![
            "Family & Relationships",
            "Cultural Heritage & Traditions",
            "Health & Resilience",
            "Reflection & Legacy"
        ]
    );
}

#[test]
fn theme_mapped_to_closing_still_ends_last() {
    let scope = ProjectScope::new("Professional Life: My Career").with_answer(
        "career_themes",
        ScopingAnswer::selections([
            "The legacy I left at my workplace",
            "Failures, setbacks & what I learned",
        ]),
    );

    assert_eq!(
        names(&scope),
        vec![
            "Career & Professional Life",
            "Values & Life Lessons",
            "Health & Resilience",
            "Reflection & Legacy"
        ]
    );
}

#[test]
fn duplicates_keep_first_occurrence() {
    let scope = ProjectScope::new("Military & Service").with_answer(
        "service_themes",
        ScopingAnswer::selections([
            "Impact on family & home life",
            "Combat experiences",
            "Leadership & lessons learned",
            "Basic training & early days",
        ]),
    );

    assert_eq!(
        names(&scope),
        vec![
            "Military & Service",
            "Values & Life Lessons",
            "Family & Relationships",
            "Reflection & Legacy"
        ]
    );
}

#[test]
fn multi_choice_order_is_preserved() {
    let forward = ProjectScope::new("Full Life Story").with_answer(
        "themes",
        ScopingAnswer::selections(["Travel & Adventures", "Military Service"]),
    );
    let base = ProjectScope::new("Full Life Story").with_answer(
        "themes",
        ScopingAnswer::selections(["Military Service"]),
    );

    let forward = names(&forward);
    let adventures = forward
        .iter()
        .position(|name| name == "Adventures & Experiences")
        .expect("adventures selected");
    let military = forward
        .iter()
        .position(|name| name == "Military & Service")
        .expect("military selected");
    assert!(adventures < military);

    // Adventures is already a Full Life Story default, so only military is appended.
    assert_eq!(forward, names(&base));
}

#[test]
fn defaults_without_closing_get_it_appended() {
    let scope = ProjectScope::new("Growing Up")
        .with_answer(
            "era_focus",
            ScopingAnswer::text("Early childhood (birth to age 10)"),
        )
        .with_answer(
            "growing_up_themes",
            ScopingAnswer::selections(["Summer vacations & adventures", "Family life & home"]),
        );

    assert_eq!(
        names(&scope),
        vec![
            "Childhood & Growing Up",
            "Cultural Heritage & Traditions",
            "Adventures & Experiences",
            "Family & Relationships",
            "Reflection & Legacy"
        ]
    );
}

#[test]
fn free_text_answers_never_expand() {
    let plain = ProjectScope::new("Military & Service");
    let with_text = ProjectScope::new("Military & Service").with_answer(
        "service_scope",
        ScopingAnswer::text("US Army, 1968-1972"),
    );
    let with_theme_like_text = ProjectScope::new("A Specific Chapter").with_answer(
        "chapter_description",
        ScopingAnswer::text("Travel & Adventures"),
    );

    assert_eq!(names(&with_text), names(&plain));
    assert_eq!(
        names(&with_theme_like_text),
        names(&ProjectScope::new("A Specific Chapter"))
    );
}

#[test]
fn unknown_labels_and_keys_contribute_nothing() {
    let scope = ProjectScope::new("Words of Wisdom")
        .with_answer(
            "wisdom_topics",
            ScopingAnswer::selections(["Knitting tips", "Parenting insights"]),
        )
        .with_answer(
            "not_a_question",
            ScopingAnswer::selections(["Military Service"]),
        );

    assert_eq!(
        names(&scope),
        vec![
            "Values & Life Lessons",
            "Family & Relationships",
            "Reflection & Legacy"
        ]
    );
}

#[test]
fn unknown_archetype_yields_only_closing_category() {
    assert_eq!(
        names(&ProjectScope::new("Space Exploration")),
        vec![CLOSING_CATEGORY]
    );
}

#[test]
fn question_lists_are_independent_copies_of_the_pool() {
    let bank = QuestionBank::shared();
    let scope = ProjectScope::new("Words of Wisdom");
    let mut selection = QuestionSelector::standard().select(&scope);

    for (name, questions) in selection.iter() {
        let pool: Vec<String> = bank
            .category(name)
            .expect("selected category is in the pool")
            .questions
            .iter()
            .map(|question| question.to_string())
            .collect();
        assert_eq!(questions, pool.as_slice());
    }

    selection
        .questions_mut("Values & Life Lessons")
        .expect("values selected")
        .clear();

    let fresh = QuestionSelector::standard().select(&scope);
    assert!(!fresh
        .questions("Values & Life Lessons")
        .expect("values selected")
        .is_empty());
}
