use std::collections::BTreeMap;

use super::{
    AgeBracket, Benchmarks, FeedbackTemplates, RecommendationTables, ScoringTables,
    TierThresholds, TierText,
};
use crate::assessment::domain::Domain;

const VERSION: &str = "2024.1";

const SKILLS_QUESTIONS: &[&str] = &[
    "talk_about_dying",
    "talk_about_grief",
    "support_dying_person",
    "provide_hands_on_care",
    "help_grieving_person",
    "advocate_for_wishes",
];

const EXPERIENCE_QUESTIONS: &[&str] = &[
    "cared_for_dying",
    "witnessed_death",
    "arranged_funeral",
    "supported_bereaved",
    "experienced_loss",
];

const KNOWLEDGE_QUESTIONS: &[&str] = &[
    "advance_care_planning",
    "palliative_care_services",
    "legal_requirements",
    "funeral_options",
    "end_of_life_choices",
    "grief_process",
];

const COMMUNITY_QUESTIONS: &[&str] = &[
    "community_support_groups",
    "local_palliative_services",
    "bereavement_services",
    "community_networks",
    "where_to_find_help",
];

const SOCIAL_QUESTIONS: &[&str] = &[
    "social_feel_connected",
    "social_someone_to_call",
    "social_practical_support",
    "social_emotional_support",
];

pub(super) fn tables() -> ScoringTables {
    ScoringTables {
        version: VERSION.to_string(),
        categories: BTreeMap::from([
            (Domain::Skills, owned(SKILLS_QUESTIONS)),
            (Domain::Experience, owned(EXPERIENCE_QUESTIONS)),
            (Domain::Knowledge, owned(KNOWLEDGE_QUESTIONS)),
            (Domain::Community, owned(COMMUNITY_QUESTIONS)),
        ]),
        social_questions: owned(SOCIAL_QUESTIONS),
        benchmarks: Benchmarks {
            overall: 5.4,
            domains: BTreeMap::from([
                (Domain::Skills, 5.8),
                (Domain::Experience, 6.2),
                (Domain::Knowledge, 4.9),
                (Domain::Community, 4.5),
            ]),
            social_connection: 2.65,
        },
        thresholds: TierThresholds::default(),
        templates: templates(),
        recommendations: recommendations(),
    }
}

fn templates() -> FeedbackTemplates {
    FeedbackTemplates {
        overall: text(
            "Your death literacy is higher than the national average. You are well placed to support others through dying, death, and grief.",
            "Your death literacy is in line with the national average. There are a few areas where you could build further confidence.",
            "Your death literacy is below the national average. The suggestions below are a good place to start building knowledge and confidence.",
        ),
        domains: BTreeMap::from([
            (
                Domain::Skills,
                text(
                    "You feel confident talking about death and providing hands-on support to people who are dying or grieving.",
                    "Your practical skills are comparable to most people. Practice can make conversations about dying feel more natural.",
                    "Talking about death and providing hands-on care may feel unfamiliar. These skills can be learned and practiced.",
                ),
            ),
            (
                Domain::Experience,
                text(
                    "Your lived experience of caring, death, and loss gives you insight that you can share with others.",
                    "Your experience with death and caring is similar to most people.",
                    "You have had fewer experiences of caring and loss. Learning from others' stories can help fill this gap.",
                ),
            ),
            (
                Domain::Knowledge,
                text(
                    "You have a strong understanding of end-of-life systems, planning, and options.",
                    "Your factual knowledge of end-of-life processes is about average.",
                    "Understanding the practical and legal side of end-of-life care would strengthen your preparedness.",
                ),
            ),
            (
                Domain::Community,
                text(
                    "You know where to find support in your community and how to connect others with it.",
                    "Your knowledge of community supports is comparable to most people.",
                    "Getting to know the services and groups in your area would make it easier to find help when it is needed.",
                ),
            ),
        ]),
    }
}

fn recommendations() -> RecommendationTables {
    RecommendationTables {
        catalogs: BTreeMap::from([
            (
                Domain::Skills,
                owned(&[
                    "Practice starting a conversation about end-of-life wishes with someone close to you.",
                    "Attend a death cafe or community conversation about dying.",
                    "Complete a short course in compassionate communication or palliative care volunteering.",
                    "Ask a palliative care nurse or volunteer about the practical care tasks families often help with.",
                    "Write down what matters most to you so you can share it with others.",
                ]),
            ),
            (
                Domain::Experience,
                owned(&[
                    "Listen to the stories of people who have cared for someone at the end of life.",
                    "Volunteer with a hospice, aged care, or bereavement support service.",
                    "Offer practical help to a friend or neighbour who is caring for someone.",
                    "Reflect on past losses and what helped you or others cope.",
                ]),
            ),
            (
                Domain::Knowledge,
                owned(&[
                    "Learn about advance care planning and complete your own advance care directive.",
                    "Find out what palliative care services are available and how to access them.",
                    "Read about the legal steps that follow a death, including certificates and wills.",
                    "Explore the range of funeral and memorial options available.",
                    "Learn about the common experiences of grief and how they can change over time.",
                ]),
            ),
            (
                Domain::Community,
                owned(&[
                    "Identify local support groups for carers and bereaved people.",
                    "Connect with a compassionate communities or neighbourhood care network.",
                    "Keep a list of local palliative, counselling, and bereavement contacts.",
                    "Ask your GP or local council what end-of-life supports exist nearby.",
                ]),
            ),
        ]),
        per_lower_domain: 2,
        age_brackets: vec![
            bracket(
                "18-24",
                "Conversations about death are valuable at any age.",
                "talking with friends and family about what matters to you",
            ),
            bracket(
                "25-34",
                "This is a good time to put the basics of planning in place.",
                "writing a will and naming who would make decisions for you",
            ),
            bracket(
                "35-44",
                "Many people start supporting ageing parents at this stage.",
                "learning how to support family members through illness and care",
            ),
            bracket(
                "45-54",
                "Caring responsibilities often increase during these years.",
                "advance care planning for yourself and the people you care for",
            ),
            bracket(
                "55-64",
                "Planning ahead now gives you more choice later.",
                "documenting your care preferences and sharing them with your family",
            ),
            bracket(
                "65+",
                "Your experience is a resource for others in your community.",
                "reviewing your advance care directive and sharing your knowledge with others",
            ),
        ],
        fallback: owned(&[
            "Keep talking openly about death, dying, and grief with the people around you.",
            "Review your own end-of-life plans and share them with someone you trust.",
            "Share what you know with others who may be less prepared.",
        ]),
        limit: 5,
    }
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn text(higher: &str, similar: &str, lower: &str) -> TierText {
    TierText {
        higher: higher.to_string(),
        similar: similar.to_string(),
        lower: lower.to_string(),
    }
}

fn bracket(key: &str, message: &str, focus: &str) -> AgeBracket {
    AgeBracket {
        key: key.to_string(),
        message: message.to_string(),
        focus: focus.to_string(),
    }
}
