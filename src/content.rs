//! Static page content: everything here is configuration data with no
//! runtime mutation.

#[derive(Clone, Debug)]
pub struct Project {
    pub name: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub github_url: &'static str,
    pub live_url: Option<&'static str>,
    pub stars: u32,
    pub updated: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        name: "Sound2Emoji",
        description: "Realtime sound-to-emoji translator using machine learning in the browser.",
        technologies: &["React", "TensorFlow.js", "Web Audio API"],
        github_url: "https://github.com/sohibnimer/sound2emoji",
        live_url: Some("https://sound2emoji.app"),
        stars: 42,
        updated: "2024-01-10",
    },
    Project {
        name: "Portfolio v3",
        description: "This interactive portfolio website with advanced animations and 3D effects.",
        technologies: &["React", "Three.js", "Framer Motion", "Tailwind"],
        github_url: "https://github.com/sohibnimer/portfolio",
        live_url: None,
        stars: 18,
        updated: "2024-01-20",
    },
];

#[derive(Clone, Debug)]
pub struct Experience {
    pub company: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

pub const EXPERIENCES: &[Experience] = &[
    Experience {
        company: "Image Technologies (ITEC)",
        role: "Software Developer",
        period: "2025 - Present",
        description: "Specializing in React, TypeScript, and full-stack development. Building dynamic, scalable solutions.",
    },
    Experience {
        company: "CSC Beyond",
        role: "Web Developer",
        period: "2023 - 2024",
        description: "Managed web development projects for clients, improving user engagement and performance.",
    },
];

#[derive(Clone, Debug)]
pub struct SkillGroup {
    pub category: &'static str,
    pub skills: &'static [&'static str],
}

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        category: "Frontend",
        skills: &["React.js", "TypeScript", "Tailwind CSS", "Redux", "Framer Motion"],
    },
    SkillGroup {
        category: "Backend",
        skills: &["Node.js", "ASP.NET Core", "Express.js", "Entity Framework"],
    },
    SkillGroup {
        category: "Databases",
        skills: &["SQL Server", "MongoDB", "PostgreSQL"],
    },
    SkillGroup {
        category: "Tools",
        skills: &["Git", "Docker", "AWS", "Vite", "Webpack"],
    },
];

#[derive(Clone, Debug)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const HERO_STATS: &[Stat] = &[
    Stat { value: "50+", label: "Projects" },
    Stat { value: "3+", label: "Years XP" },
    Stat { value: "99%", label: "Satisfaction" },
];

#[derive(Clone, Debug)]
pub struct ProfileFact {
    pub icon: &'static str,
    pub title: &'static str,
    pub detail: &'static str,
}

pub const PROFILE_FACTS: &[ProfileFact] = &[
    ProfileFact {
        icon: "🎓",
        title: "Education",
        detail: "Computing Smart Device — Tafila Technical University (2019-2024)",
    },
    ProfileFact {
        icon: "📍",
        title: "Location",
        detail: "Amman, Jordan",
    },
    ProfileFact {
        icon: "👤",
        title: "Personal",
        detail: "DOB: 09/29/2000 • Jordanian",
    },
];

#[derive(Clone, Debug)]
pub struct ContactChannel {
    pub icon: &'static str,
    pub kind: &'static str,
    pub value: &'static str,
    pub href: Option<&'static str>,
}

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        icon: "✉️",
        kind: "Email",
        value: "zacksohib6@gmail.com",
        href: Some("mailto:zacksohib6@gmail.com"),
    },
    ContactChannel {
        icon: "📞",
        kind: "Phone",
        value: "+962 78 233 3288",
        href: Some("tel:+962782333288"),
    },
    ContactChannel {
        icon: "📍",
        kind: "Location",
        value: "Amman, Jordan",
        href: None,
    },
];

pub const OWNER_NAME: &str = "Sohib Nimer";
pub const OWNER_TAGLINE: &str = "Full-Stack Developer — React · Node · ASP.NET · SQL";
pub const CV_PATH: &str = "/SohibNimerCV.pdf";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_are_complete() {
        for project in PROJECTS {
            assert!(!project.name.is_empty());
            assert!(!project.technologies.is_empty());
        }
        for group in SKILL_GROUPS {
            assert!(!group.skills.is_empty());
        }
        assert!(!EXPERIENCES.is_empty());
    }
}
