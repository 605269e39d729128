//! Copy, prices and people. Everything on the page that isn't layout.

/// In-page anchors, in the order the sections appear.
pub mod anchor {
    pub const HOME: &str = "home";
    pub const CAREER_TESTS: &str = "career-tests";
    pub const HOW_IT_WORKS: &str = "how-it-works";
    pub const COURSES: &str = "courses";
    pub const SUCCESS: &str = "success";
    pub const CONTACT: &str = "contact";

    #[cfg(test)]
    pub const ALL: [&str; 6] = [HOME, CAREER_TESTS, HOW_IT_WORKS, COURSES, SUCCESS, CONTACT];
}

pub const BRAND: &str = "learnify.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Link(NavLink),
    Dropdown {
        title: &'static str,
        links: &'static [NavLink],
    },
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem::Link(NavLink {
        label: "Home",
        href: "#home",
    }),
    NavItem::Dropdown {
        title: "Services",
        links: &[
            NavLink {
                label: "Career Tests",
                href: "#career-tests",
            },
            NavLink {
                label: "Counselling",
                href: "#courses",
            },
        ],
    },
    NavItem::Link(NavLink {
        label: "Courses",
        href: "#courses",
    }),
    NavItem::Dropdown {
        title: "Resources",
        links: &[
            NavLink {
                label: "How it Works",
                href: "#how-it-works",
            },
            NavLink {
                label: "Success Stories",
                href: "#success",
            },
        ],
    },
    NavItem::Link(NavLink {
        label: "Contact Us",
        href: "#contact",
    }),
];

pub const NAV_CALLS_TO_ACTION: &[NavLink] = &[
    NavLink {
        label: "Speak to a Counsellor",
        href: "#contact",
    },
    NavLink {
        label: "Take test",
        href: "#courses",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub id: u32,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub align: Align,
    pub tint: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        id: 1,
        title: "Career Selection Tests",
        subtitle: "Psychometric + Aptitude",
        description: "Utilize our scientifically designed psychometric and aptitude tests to discover your strengths, personality traits, and career inclinations for a perfect match.",
        image: "/assets/testIcon.jpg",
        align: Align::Left,
        tint: "#E6E6FA",
    },
    Feature {
        id: 2,
        title: "One-on-One Counselling",
        subtitle: "Online or In-person",
        description: "Connect with our expert career counselors for personalized guidance. We offer flexible sessions, either online or in-person, to fit your schedule and needs.",
        image: "/assets/counsellingIcon.jpg",
        align: Align::Right,
        tint: "#FFDAB9",
    },
    Feature {
        id: 3,
        title: "Career Reports",
        subtitle: "Detailed guidance PDF",
        description: "Receive a comprehensive PDF report after your assessment, detailing your career recommendations, educational pathways, and actionable next steps.",
        image: "/assets/reportIcon.jpg",
        align: Align::Right,
        tint: "#C3D5C5",
    },
    Feature {
        id: 4,
        title: "Workshops & Webinars",
        subtitle: "Career awareness programs",
        description: "Join our interactive workshops and webinars to stay updated on the latest career trends, develop essential skills, and network with industry professionals.",
        image: "/assets/webinarIcon.png",
        align: Align::Left,
        tint: "#B3D4F5",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanAction {
    /// Hands the plan name to the payment gateway.
    Checkout(&'static str),
    BookSession,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plan {
    pub title: &'static str,
    pub price: &'static str,
    pub button: &'static str,
    pub action: PlanAction,
    pub highlight: bool,
}

pub const PLANS: &[Plan] = &[
    Plan {
        title: "Career Selection Test",
        price: "₹X",
        button: "Buy Now",
        action: PlanAction::Checkout("Career Selection Test"),
        highlight: false,
    },
    Plan {
        title: "Counselling Session",
        price: "₹Y",
        button: "Book Now",
        action: PlanAction::BookSession,
        highlight: false,
    },
    Plan {
        title: "Test + Counselling Combo",
        price: "₹Z",
        button: "Best Value",
        action: PlanAction::Checkout("Test + Counselling Combo"),
        highlight: true,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub company_logo: &'static str,
    pub avatar: &'static str,
}

/// Laid out as a 2x2 grid, one reveal per row.
pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "The aptitude test put words to something I'd felt for years. Two months later I switched streams and haven't looked back.",
        name: "Bessie Cooper",
        role: "Engineering student",
        company: "Alterbone",
        company_logo: "https://via.placeholder.com/90x24.png?text=Alterbone",
        avatar: "https://i.pravatar.cc/80?img=12",
    },
    Testimonial {
        quote: "I didn't expect a counselling session to be this individualized. My counsellor had read my whole report before we even spoke.",
        name: "Albert Flores",
        role: "Senior Product Manager",
        company: "Ridoria",
        company_logo: "https://via.placeholder.com/80x24.png?text=Ridoria",
        avatar: "https://i.pravatar.cc/80?img=22",
    },
    Testimonial {
        quote: "We run the workshops for our whole graduate intake now. People arrive knowing what they actually want to work on.",
        name: "Jenny Wilson",
        role: "Head of Marketing",
        company: "Incanto",
        company_logo: "https://via.placeholder.com/90x24.png?text=Incanto",
        avatar: "https://i.pravatar.cc/80?img=36",
    },
    Testimonial {
        quote: "Clear reporting and actionable next steps helped us move faster with confidence.",
        name: "Sana Kapoor",
        role: "Product Lead",
        company: "Kinetiq",
        company_logo: "https://via.placeholder.com/90x24.png?text=Kinetiq",
        avatar: "https://i.pravatar.cc/80?img=48",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineStep {
    pub step: u32,
    pub title: &'static str,
    pub description: &'static str,
}

pub const TIMELINE: &[TimelineStep] = &[
    TimelineStep {
        step: 1,
        title: "Take the Test",
        description: "Online payment gateway integrated",
    },
    TimelineStep {
        step: 2,
        title: "Get Your Career Report",
        description: "Instant access/download",
    },
    TimelineStep {
        step: 3,
        title: "Speak to a Counselor",
        description: "Personalized session scheduling",
    },
];

pub const FOOTER_LINKS: &[NavLink] = &[
    NavLink {
        label: "Home",
        href: "#home",
    },
    NavLink {
        label: "Career Tests",
        href: "#career-tests",
    },
    NavLink {
        label: "Counselling",
        href: "#courses",
    },
    NavLink {
        label: "Success Stories",
        href: "#success",
    },
    NavLink {
        label: "Contact",
        href: "#contact",
    },
];

pub const CONTACT_DETAILS: &[(&str, &str)] = &[
    ("📞", "+91 98765 43210"),
    ("✉️", "support@example.com"),
    ("🏢", "123 Learning St, New Delhi, India"),
];

pub const SOCIAL_LINKS: &[NavLink] = &[
    NavLink {
        label: "Facebook",
        href: "https://facebook.com",
    },
    NavLink {
        label: "LinkedIn",
        href: "https://linkedin.com",
    },
    NavLink {
        label: "Instagram",
        href: "https://instagram.com",
    },
    NavLink {
        label: "YouTube",
        href: "https://youtube.com",
    },
];
