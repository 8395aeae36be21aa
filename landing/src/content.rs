// Page copy, shared by the visible sections and the structured data
// Developed by The Deep Mirror Team (c)2026

pub const SITE_NAME: &str = "The Deep Mirror";
pub const SITE_URL: &str = "https://the-deep-mirror.vercel.app";
pub const COPYRIGHT_YEAR: u16 = 2026;

pub const HERO_TITLE: &str = "Why Enneagram Tests Are Inaccurate—And How AI Fixes It";
pub const HERO_DESCRIPTION: &str = "Replace static surveys with dynamic conversational interviews. \
     Get clinical-grade Enneagram typing through AI that probes deeper than any questionnaire can.";

/// Internal pages linked from the nav and the footer.
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("/blog", "Blog"),
    ("/compare", "Comparisons"),
    ("/faq", "FAQ"),
];

pub struct ValueProp {
    pub title: &'static str,
    pub description: &'static str,
}

pub const VALUE_PROPS: &[ValueProp] = &[
    ValueProp {
        title: "Beyond Survey Limitations",
        description: "Static questionnaires can't adapt to your responses or probe inconsistencies. \
            Our AI conducts real psychological interviews that evolve based on what you reveal.",
    },
    ValueProp {
        title: "Clinical-Grade Assessment",
        description: "Built for executive coaches and HR leaders who need accurate personality insights, \
            not feel-good results that reinforce social desirability bias.",
    },
    ValueProp {
        title: "Dynamic Subtype Detection",
        description: "Unlike traditional tools that provide snapshot results, our conversational AI \
            refines your type and subtype through ongoing interaction patterns.",
    },
];

pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: &[Faq] = &[
    Faq {
        question: "Has the Enneagram been debunked?",
        answer: "The Enneagram framework itself has empirical support, but traditional testing methods \
            are problematic. Static surveys suffer from social desirability bias and can't capture the \
            nuanced motivations that define each type. Our AI approach addresses these methodological \
            limitations.",
    },
    Faq {
        question: "What makes this different from other Enneagram tests?",
        answer: "Every other tool uses static questionnaires that can't adapt to your responses. We use \
            conversational AI that probes inconsistencies and explores motivations dynamically, like a \
            skilled therapist would. This eliminates the mistyping issues common with survey-based \
            approaches.",
    },
    Faq {
        question: "Why do so many people get mistyped on Enneagram tests?",
        answer: "Traditional tests can't distinguish between behavior and motivation, leading to \
            surface-level typing. They also can't detect when someone is answering based on their ideal \
            self rather than their actual patterns. Our AI interviews dig deeper to uncover true \
            motivational drivers.",
    },
    Faq {
        question: "How much does clinical-grade Enneagram testing cost?",
        answer: "Professional tools like iEQ9 charge $30-60 per assessment plus expensive certification \
            requirements. We're building a more accessible solution that delivers clinical accuracy \
            without the traditional cost barriers or manual administration overhead.",
    },
    Faq {
        question: "Is this suitable for HR and executive coaching applications?",
        answer: "Yes, we're specifically designed for professional use cases where accuracy matters more \
            than validation. The conversational approach provides the depth executive coaches need while \
            eliminating the reliability issues that limit current tools in HR settings.",
    },
];
