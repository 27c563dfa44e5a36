//! Static copy for the page sections.

pub const OWNER_NAME: &str = "Rajesh K";
pub const OWNER_FIRST_NAME: &str = "Rajesh";
pub const LOGO_IMAGE: &str = "/assets/logo.png";
pub const HERO_IMAGE: &str = "/assets/profile-hero.png";
pub const ABOUT_IMAGE: &str = "/assets/profile-photo.jpg";
pub const RESUME_PDF: &str = "/assets/rajesh-k-resume.pdf";
pub const RESUME_DOWNLOAD_NAME: &str = "Rajesh_K_Resume.pdf";

pub const ROLES: &[&str] = &[
    "Full-Stack Developer",
    "GDG OnCampus Organizer",
    "Freelancer",
    "Community Builder",
    "AI Explorer",
    "Tech Educator",
    "Student Mentor",
];

pub const HERO_TAGLINE: &str = "Passionate about creating exceptional digital experiences through clean code, innovative design, and cutting-edge technology.";

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "I’m Rajesh K, an Information Technology undergraduate with a strong interest in software development, frontend engineering, and building products that solve real problems. I enjoy working across the full development flow, from designing user-friendly interfaces to implementing functional, scalable solutions.",
    "I have hands-on experience through internships and academic projects, where I’ve built responsive websites, AI-powered systems, and real-world applications with social impact. My work on projects like Left2Feed reflects my interest in combining technology with meaningful use cases.",
    "Beyond development, I actively contribute to the tech community. I was part of the organizing team for DevFest Salem, where I helped streamline workflows and contributed to increasing event-related sales from 0 to 750 registrations through better coordination and execution. I’m also an organizer at Google Developer Groups On Campus (GDGoC) at Paavai Engineering College, where I help plan and deliver technical sessions and events.",
];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub glyph: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        href: "https://github.com/Rajesh-k11",
        glyph: "GH",
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/rajeshk1102/",
        glyph: "in",
    },
    SocialLink {
        label: "Twitter",
        href: "https://x.com/The_rajesh_",
        glyph: "X",
    },
    SocialLink {
        label: "Email",
        href: "mailto:rajeshkanthasamy11@gmail.com",
        glyph: "@",
    },
];

/// The contact section lists every social link except email, which has its own card.
pub fn follow_links() -> impl Iterator<Item = &'static SocialLink> {
    SOCIAL_LINKS
        .iter()
        .filter(|link| !link.href.starts_with("mailto:"))
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Experience {
    pub period: &'static str,
    pub title: &'static str,
    pub organization: &'static str,
    pub description: &'static str,
}

pub const EXPERIENCES: &[Experience] = &[
    Experience {
        period: "2025",
        title: "Organizer – Google Developer Groups On Campus (GDGoC)",
        organization: "Paavai Engineering College",
        description: "Organizing technical sessions, workshops, and hackathons. Collaborate with peers and speakers to deliver learning-focused events and promote hands-on development among students.",
    },
    Experience {
        period: "Jul 2024 – Aug 2024",
        title: "Software Development Intern (Frontend)",
        organization: "Aastrazen Technologies",
        description: "Designed and developed a responsive marketing website for a digital agency. Worked on UI implementation, layout responsiveness, and real-world development workflows in a team environment.",
    },
    Experience {
        period: "2025",
        title: "Secretary – Department of Information Technology",
        organization: "Paavai Engineering College",
        description: "Coordinated department-level technical events and workshops. Managed communication, planning, and execution to ensure smooth delivery of academic and technical activities.",
    },
    Experience {
        period: "2023 - Present",
        title: "Volunteer – Talent Quest for India",
        organization: "Talent Quest for India",
        description: "Conducted technology awareness sessions for rural school students. Supported initiatives focused on digital literacy, career guidance, and student engagement.",
    },
];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Highlight {
    pub glyph: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        glyph: "</>",
        title: "Clean Code",
        description: "Writing maintainable and scalable code",
    },
    Highlight {
        glyph: "◈",
        title: "UI/UX Design",
        description: "Creating beautiful and intuitive interfaces",
    },
    Highlight {
        glyph: "✦",
        title: "Problem Solving",
        description: "Finding innovative solutions to complex challenges",
    },
    Highlight {
        glyph: "☕",
        title: "Continuous Learning",
        description: "Always exploring new technologies and trends",
    },
];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Award {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub badge: &'static str,
    pub image: &'static str,
}

pub const AWARD: Award = Award {
    title: "Dr. APJ Abdul Kalam Award",
    subtitle: "Best Engineering College Student",
    description: "Recognized for academic performance, leadership, and active contribution to technical and community initiatives.",
    badge: "Prestigious Achievement",
    image: "/assets/award.jpg",
};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Service {
    pub glyph: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub tone: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        glyph: "▣",
        title: "Web Engineering",
        description: "Scalable full-stack applications with AI integration and UI/UX focus.",
        tags: &["React/Node.js", "AI-Assisted Dev", "SaaS"],
        tone: "tone-blue",
    },
    Service {
        glyph: "◈",
        title: "Brand Identity",
        description: "Visual storytelling from logos to physical product packaging.",
        tags: &["Logo Design", "Business Cards", "Packaging"],
        tone: "tone-purple",
    },
    Service {
        glyph: "↗",
        title: "Digital Growth",
        description: "Data-driven strategies to boost visibility and engagement.",
        tags: &["SEO", "Digital Marketing", "Analytics"],
        tone: "tone-green",
    },
    Service {
        glyph: "◎",
        title: "Community & Events",
        description: "End-to-end management for hackathons, tech fests, and workshops.",
        tags: &["DevFest", "Speaker Outreach", "Hackathons"],
        tone: "tone-orange",
    },
];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Skill {
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SkillGroup {
    pub title: &'static str,
    pub glyph: &'static str,
    pub skills: &'static [Skill],
}

const fn skill(name: &'static str, description: &'static str) -> Skill {
    Skill { name, description }
}

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        title: "Frontend",
        glyph: "▤",
        skills: &[
            skill("HTML5", "Semantic structure, accessibility, SEO basics"),
            skill("CSS3 / Bootstrap", "Responsive layouts, modern UI design"),
            skill("JavaScript (ES6+)", "DOM manipulation, async logic"),
            skill("React.js", "Component-based UI, hooks, state handling"),
            skill("UI/UX Basics", "Layout design, user flows, wireframes"),
            skill("GSAP", "Basic UI animations (learning & experimentation)"),
        ],
    },
    SkillGroup {
        title: "Backend / Programming",
        glyph: "▥",
        skills: &[
            skill("Java", "OOP concepts, basic application logic"),
            skill("Python", "Automation, scripting, AI/ML project usage"),
            skill("Node.js (Basic)", "API handling, server-side logic"),
            skill("MongoDB (Basic)", "CRUD operations, schema design"),
            skill("REST APIs", "API integration and data handling"),
        ],
    },
    SkillGroup {
        title: "Tools & Platforms",
        glyph: ">_",
        skills: &[
            skill("Git & GitHub", "Version control, collaboration"),
            skill("VS Code", "Primary development environment"),
            skill("Figma", "UI design, wireframes, prototyping"),
            skill("Canva", "Visual content & presentation design"),
            skill("Netlify / Vercel", "Website deployment"),
            skill("Linux (Basic)", "Command line usage"),
        ],
    },
    SkillGroup {
        title: "AI & LLM Tools",
        glyph: "◇",
        skills: &[
            skill("ChatGPT", "Prompt engineering, code assistance"),
            skill("Gemini (Google AI)", "Research, ideation, problem solving"),
            skill("Antigravity AI", "Creative AI workflows & experimentation"),
            skill("OpenAI Vision", "Image-based AI processing"),
            skill("ElevenLabs", "AI voice generation"),
            skill("VEO 3", "AI video & visual content generation"),
        ],
    },
];

pub const META_SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        title: "Technical Strengths",
        glyph: "◎",
        skills: &[
            skill("Rapid App Development", "Using AI-assisted workflows"),
            skill("Frontend Focus", "Clean UI and usability"),
            skill("Problem Solving", "Structured logic and experimentation"),
            skill("Prototyping", "Translating ideas into working prototypes"),
        ],
    },
    SkillGroup {
        title: "AI & Productivity",
        glyph: "»",
        skills: &[
            skill("AI-Assisted Coding", "Debugging and refactoring with AI"),
            skill("Prompt Engineering", "For content, code, and ideation"),
            skill("Faster MVP Development", "Using LLMs and AI tools"),
        ],
    },
];

pub const FAMILIAR_WITH: &[&str] = &["Python", "Java", "React", "Firebase", "Supabase", "Nginx"];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ContactChannel {
    pub glyph: &'static str,
    pub title: &'static str,
    pub value: &'static str,
    pub link: &'static str,
}

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        glyph: "✉",
        title: "Email",
        value: "rajeshkanthasamy11@gmail.com",
        link: "mailto:rajeshkanthasamy11@gmail.com",
    },
    ContactChannel {
        glyph: "☏",
        title: "Phone",
        value: "+91 9659315589",
        link: "tel:+919659315589",
    },
    ContactChannel {
        glyph: "⌖",
        title: "Location",
        value: "Namakkal, Tamil Nadu",
        link: "https://maps.google.com",
    },
];

pub const CONTACT_INTRO: &str = "I’m open to discussions around projects, internships, collaborations, events, or general tech conversations. Whether you’re reaching out with an idea, an opportunity, or a quick question, feel free to drop a message.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follow_links_skip_email() {
        let labels: Vec<&str> = follow_links().map(|link| link.label).collect();
        assert_eq!(labels, vec!["GitHub", "LinkedIn", "Twitter"]);
    }

    #[test]
    fn every_skill_group_is_populated() {
        for group in SKILL_GROUPS.iter().chain(META_SKILL_GROUPS) {
            assert!(!group.skills.is_empty(), "{}", group.title);
        }
    }

    #[test]
    fn roles_are_non_empty() {
        assert!(!ROLES.is_empty());
        assert!(ROLES.iter().all(|role| !role.is_empty()));
    }
}
