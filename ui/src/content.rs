//! Static page content: rotating hero titles, services, skills, testimonials,
//! experience history and contact links.
//!
//! Translatable labels are stored as Fluent keys and resolved at render time
//! through [`crate::i18n::lookup`]; proper nouns, dates and testimonial quotes
//! are shown as written.

use std::f64::consts::PI;

use crate::config::SiteConfig;

pub const HERO_TITLES: [&str; 3] = ["Full Stack Developer", "AI Developer", "React Developer"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub key: &'static str,
    pub icon: &'static str,
    pub title_key: &'static str,
    pub description_key: &'static str,
    /// Accent modifier for `.service-card--{accent}`.
    pub accent: &'static str,
}

pub const SERVICES: [Service; 3] = [
    Service {
        key: "fullstack",
        icon: "</>",
        title_key: "services-fullstack-title",
        description_key: "services-fullstack-description",
        accent: "purple",
    },
    Service {
        key: "ai",
        icon: "🤖",
        title_key: "services-ai-title",
        description_key: "services-ai-description",
        accent: "blue",
    },
    Service {
        key: "backend",
        icon: "🖥",
        title_key: "services-backend-title",
        description_key: "services-backend-description",
        accent: "green",
    },
];

/// Number of bars in the skill speed meter.
pub const SKILL_SEGMENTS: usize = 20;
/// Radius of the circular indicator in its 100×100 viewBox.
pub const RING_RADIUS: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub key: &'static str,
    pub label_key: &'static str,
    /// Proficiency, 0–100.
    pub level: u8,
    pub color: &'static str,
    pub gradient_from: &'static str,
    pub gradient_to: &'static str,
}

impl Skill {
    pub fn filled_segments(&self) -> usize {
        let level = f64::from(self.level.min(100));
        (level / 100.0 * SKILL_SEGMENTS as f64).round() as usize
    }

    pub fn segment_is_filled(&self, segment: usize) -> bool {
        segment < self.filled_segments()
    }

    /// Bars grow from 40% to 100% of the meter height.
    pub fn segment_height_pct(segment: usize) -> f64 {
        40.0 + (segment as f64 / SKILL_SEGMENTS as f64) * 60.0
    }

    /// Stagger: rows start 0.1 s apart, bars within a row 0.03 s apart.
    pub fn segment_delay_s(row: usize, segment: usize) -> f64 {
        row as f64 * 0.1 + segment as f64 * 0.03
    }

    pub fn ring_circumference() -> f64 {
        2.0 * PI * RING_RADIUS
    }

    pub fn ring_dash_offset(&self) -> f64 {
        Self::ring_circumference() * (1.0 - f64::from(self.level.min(100)) / 100.0)
    }
}

pub const SKILLS: [Skill; 6] = [
    Skill {
        key: "nextjs",
        label_key: "skills-nextjs",
        level: 95,
        color: "#ffffff",
        gradient_from: "#8b5cf6",
        gradient_to: "#ec4899",
    },
    Skill {
        key: "nestjs",
        label_key: "skills-nestjs",
        level: 90,
        color: "#e0234e",
        gradient_from: "#e0234e",
        gradient_to: "#f472b6",
    },
    Skill {
        key: "claude",
        label_key: "skills-claude",
        level: 92,
        color: "#d97706",
        gradient_from: "#d97706",
        gradient_to: "#fbbf24",
    },
    Skill {
        key: "cursor",
        label_key: "skills-cursor",
        level: 88,
        color: "#8b5cf6",
        gradient_from: "#8b5cf6",
        gradient_to: "#a78bfa",
    },
    Skill {
        key: "python",
        label_key: "skills-python",
        level: 85,
        color: "#3776ab",
        gradient_from: "#3776ab",
        gradient_to: "#60a5fa",
    },
    Skill {
        key: "php",
        label_key: "skills-php",
        level: 90,
        color: "#777bb4",
        gradient_from: "#777bb4",
        gradient_to: "#a78bfa",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub id: u32,
    pub rating: u8,
    pub text: &'static str,
    pub project: &'static str,
    pub date: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        id: 1,
        rating: 5,
        text: "It was a pleasure working with Sivan Wolberg. He quickly understood our web app setup and was very responsive in fixing bugs and adding new features. His work was efficient and professional.",
        project: "Web App Specialist - Node.js/React Project",
        date: "Oct 2025",
    },
    Testimonial {
        id: 2,
        rating: 5,
        text: "Excellent full-stack developer with deep knowledge of modern technologies. Communication was clear and deliverables were always on time. Highly recommended for complex projects.",
        project: "Full-Stack Developer for Social App",
        date: "Jun 2025",
    },
    Testimonial {
        id: 3,
        rating: 5,
        text: "Great experience working with Sivan on our marketing platform. Strong technical skills combined with good understanding of business requirements. Would definitely work with again.",
        project: "Full-Stack Developer for Marketing Platform",
        date: "Mar 2025",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillTag {
    pub label: &'static str,
    /// Badge color modifier for `.badge--{tone}`.
    pub tone: &'static str,
}

const fn tag(label: &'static str, tone: &'static str) -> SkillTag {
    SkillTag { label, tone }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
    pub id: u32,
    pub icon: &'static str,
    pub company: &'static str,
    pub role: &'static str,
    pub date: &'static str,
    pub description: &'static str,
    pub skills: &'static [SkillTag],
}

pub const EXPERIENCE: [Experience; 8] = [
    Experience {
        id: 1,
        icon: "💼",
        company: "NICE",
        role: "Senior Front End Engineer",
        date: "2019 - 2022",
        description: "Developed hybrid applications for a global contact center platform. Led legacy system migrations and improved code quality with automated testing.",
        skills: &[tag("Angular", "red"), tag("TypeScript", "blue"), tag("Node.js", "green")],
    },
    Experience {
        id: 2,
        icon: "🗄",
        company: "DBmaestro",
        role: "Full Stack Engineer",
        date: "2017 - 2018",
        description: "Built database management tools for DevOps teams. Developed features using the MEAN stack with cloud deployment on AWS.",
        skills: &[tag("Node.js", "green"), tag("Angular", "red"), tag("AWS", "orange")],
    },
    Experience {
        id: 3,
        icon: "📈",
        company: "Bidalgo",
        role: "Full Stack Engineer",
        date: "2014 - 2017",
        description: "Built marketing analytics platform for Facebook advertisers. Developed end-to-end solutions handling millions of data points daily.",
        skills: &[
            tag("AngularJS", "red"),
            tag("Node.js", "green"),
            tag("PHP", "indigo"),
            tag("Python", "yellow"),
        ],
    },
    Experience {
        id: 4,
        icon: "🎵",
        company: "Fuga Technologies",
        role: "Full Stack Engineer",
        date: "2012 - 2014",
        description: "Built music distribution and e-commerce platforms. Led modernization from PHP to JavaScript frameworks with AWS infrastructure.",
        skills: &[tag("PHP", "indigo"), tag("Node.js", "green"), tag("AWS", "orange")],
    },
    Experience {
        id: 5,
        icon: "🖥",
        company: "Delanet",
        role: "Backend Engineer",
        date: "2010 - 2012",
        description: "Developed high-traffic web applications with optimized database performance. Ensured PCI compliance and system security.",
        skills: &[tag("PHP", "indigo"), tag(".NET", "purple"), tag("MSSQL", "blue")],
    },
    Experience {
        id: 6,
        icon: "🚀",
        company: "Time Tunnel",
        role: "CTO",
        date: "2009 - 2010",
        description: "Led technology strategy and development team. Managed web and desktop projects while driving business growth initiatives.",
        skills: &[tag("ASP.NET", "purple"), tag("PHP", "indigo"), tag("Leadership", "pink")],
    },
    Experience {
        id: 7,
        icon: "👥",
        company: "Xplore",
        role: "Back End Team Lead",
        date: "2007 - 2009",
        description: "Managed development team building enterprise applications. Delivered streaming solutions and multi-tier architecture systems.",
        skills: &[tag(".NET", "purple"), tag("Java", "orange"), tag("Team Lead", "pink")],
    },
    Experience {
        id: 8,
        icon: "⌨",
        company: "Adgency",
        role: "PHP Web Developer",
        date: "2005 - 2007",
        description: "Built websites and internal management systems. Handled server administration and web service integrations.",
        skills: &[tag("PHP", "indigo"), tag("Linux", "gray"), tag("MVC", "teal")],
    },
];

/// About-section highlight cards.
pub const ABOUT_HIGHLIGHTS: [(&str, &str); 3] = [
    ("🚀", "about-highlight-1"),
    ("</>", "about-highlight-2"),
    ("💡", "about-highlight-3"),
];

/// Navbar anchors: (`#fragment`, label key).
pub const NAV_SECTIONS: [(&str, &str); 6] = [
    ("home", "nav-home"),
    ("about", "nav-about"),
    ("services", "nav-services"),
    ("skills", "nav-skills"),
    ("testimonials", "nav-testimonials"),
    ("contact", "nav-contact"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    LinkedIn,
    Upwork,
    Email,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactLink {
    pub kind: ContactKind,
    pub label: &'static str,
    pub href: String,
}

impl ContactLink {
    pub fn is_mailto(&self) -> bool {
        self.href.starts_with("mailto:")
    }

    /// `target` for the anchor; mail links stay in the current tab.
    pub fn target(&self) -> Option<&'static str> {
        (!self.is_mailto()).then_some("_blank")
    }

    pub fn rel(&self) -> Option<&'static str> {
        (!self.is_mailto()).then_some("noopener noreferrer")
    }

    pub fn css_modifier(&self) -> &'static str {
        match self.kind {
            ContactKind::LinkedIn => "linkedin",
            ContactKind::Upwork => "upwork",
            ContactKind::Email => "email",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self.kind {
            ContactKind::LinkedIn => "in",
            ContactKind::Upwork => "Up",
            ContactKind::Email => "✉",
        }
    }
}

/// Floating call-to-action order: LinkedIn, Upwork, Email.
pub fn contact_links(config: &SiteConfig) -> Vec<ContactLink> {
    vec![
        ContactLink {
            kind: ContactKind::LinkedIn,
            label: "LinkedIn",
            href: config.contact.linkedin.clone(),
        },
        ContactLink {
            kind: ContactKind::Upwork,
            label: "Upwork",
            href: config.contact.upwork.clone(),
        },
        ContactLink {
            kind: ContactKind::Email,
            label: "Email",
            href: config.mailto(),
        },
    ]
}

/// Every data-driven Fluent key referenced by the tables above.
pub fn translation_keys() -> Vec<&'static str> {
    let mut keys = Vec::new();
    for service in &SERVICES {
        keys.push(service.title_key);
        keys.push(service.description_key);
    }
    keys.extend(SKILLS.iter().map(|skill| skill.label_key));
    keys.extend(ABOUT_HIGHLIGHTS.iter().map(|(_, key)| *key));
    keys.extend(NAV_SECTIONS.iter().map(|(_, key)| *key));
    keys
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_segments_round_to_nearest_bar() {
        let filled: Vec<usize> = SKILLS.iter().map(Skill::filled_segments).collect();
        // 95 → 19, 90 → 18, 92 → 18.4 → 18, 88 → 17.6 → 18, 85 → 17, 90 → 18
        assert_eq!(filled, vec![19, 18, 18, 18, 17, 18]);
        assert!(SKILLS[0].segment_is_filled(18));
        assert!(!SKILLS[0].segment_is_filled(19));
    }

    #[test]
    fn segment_heights_ramp_from_forty_percent() {
        assert_eq!(Skill::segment_height_pct(0), 40.0);
        assert_eq!(Skill::segment_height_pct(10), 70.0);
        assert!(Skill::segment_height_pct(SKILL_SEGMENTS - 1) < 100.0);
    }

    #[test]
    fn ring_offset_tracks_level() {
        let full = Skill {
            level: 100,
            ..SKILLS[0]
        };
        assert!(full.ring_dash_offset().abs() < 1e-9);
        let half = Skill { level: 50, ..SKILLS[0] };
        assert!((half.ring_dash_offset() - Skill::ring_circumference() / 2.0).abs() < 1e-9);
    }

    #[test]
    fn segment_delays_stagger_rows_and_bars() {
        assert!((Skill::segment_delay_s(2, 5) - 0.35).abs() < 1e-9);
    }

    #[test]
    fn mail_links_do_not_open_new_tabs() {
        let links = contact_links(&SiteConfig::default());
        let labels: Vec<_> = links.iter().map(|link| link.label).collect();
        assert_eq!(labels, vec!["LinkedIn", "Upwork", "Email"]);

        let email = &links[2];
        assert!(email.is_mailto());
        assert_eq!(email.target(), None);
        assert_eq!(email.rel(), None);
        assert_eq!(links[0].target(), Some("_blank"));
        assert_eq!(links[1].rel(), Some("noopener noreferrer"));
    }

    #[test]
    fn experience_ids_are_unique() {
        let mut ids: Vec<u32> = EXPERIENCE.iter().map(|exp| exp.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), EXPERIENCE.len());
    }
}
