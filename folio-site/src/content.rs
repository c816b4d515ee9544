//! Static content tables the portfolio sections render from.
//!
//! Ported verbatim from the deployed site. Display order matters for
//! the skills table, so categories live in an insertion-ordered map.

use indexmap::IndexMap;
use serde::Serialize;

/// The hero section's identity block.
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct Profile {
    pub name: &'static str,
    pub description: &'static str,
    pub roles: Vec<&'static str>,
    pub email: &'static str,
    pub phone: &'static str,
    pub github_url: &'static str,
    pub linkedin_url: &'static str,
}

/// A portfolio project card.
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: Vec<&'static str>,
    pub github_url: &'static str,
    pub live_url: Option<&'static str>,
}

/// A footer social link.
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct SocialLink {
    pub platform: &'static str,
    pub url: &'static str,
}

/// A contact-section method entry (copyable value + deep link).
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct ContactMethod {
    pub label: &'static str,
    pub value: &'static str,
    pub link: &'static str,
}

/// Returns the hero/identity block.
#[must_use]
pub fn profile() -> Profile {
    Profile {
        name: "Abunesh R P",
        description: "I build powerful, scalable web applications and AI-driven solutions \
                      by combining expertise in frontend, backend, and data modeling — \
                      delivering innovative products with precision and performance.",
        roles: vec![
            "Fullstack Developer",
            "Data Analyst",
            "AI/ML Developer",
            "Innovation Engineer",
        ],
        email: "abunesh2006@gmail.com",
        phone: "+91 9042845355",
        github_url: "https://github.com/Abunesh126",
        linkedin_url: "https://www.linkedin.com/in/abunesh-r-p-803677278/",
    }
}

/// Returns the skills table, category display order preserved.
#[must_use]
pub fn skill_categories() -> IndexMap<&'static str, Vec<&'static str>> {
    IndexMap::from([
        ("Languages", vec!["Python", "Java", "JavaScript", "TypeScript"]),
        ("Frontend", vec!["React", "TailwindCSS", "Bootstrap"]),
        ("Backend", vec!["Node.js", "Laravel"]),
        ("Database", vec!["MongoDB", "MySQL", "PostgreSQL"]),
        ("Tools", vec!["Git", "GitHub", "VS Code", "Jupyter", "Postman", "PyCharm"]),
        ("AI & ML", vec!["TensorFlow", "Tableau", "PowerBI"]),
        ("Design", vec!["Blender", "Canva", "Figma"]),
    ])
}

/// Returns the six project cards.
#[must_use]
pub fn projects() -> Vec<Project> {
    vec![
        Project {
            title: "HydroWatch",
            description: "A TypeScript-based water management app, designed with Figma, \
                          featuring real-time monitoring and analytics. Integrated with an \
                          LSTM RNN model for water level prediction to support flood risk \
                          assessment and sustainable resource management.",
            technologies: vec!["TypeScript", "React", "Node.js", "Python/Flask", "LSTM RNN", "Figma"],
            github_url: "https://github.com/Abunesh126/HydroWatch",
            live_url: Some("https://hydrowatch-demo.vercel.app"),
        },
        Project {
            title: "DOVE Sign",
            description: "An innovative digital signing platform with advanced authentication \
                          and document management features. Built primarily with JavaScript, \
                          offering secure document workflows and digital signature capabilities.",
            technologies: vec!["JavaScript", "Java", "XSLT", "HTML", "Python"],
            github_url: "https://github.com/Abunesh126/DOVE-Sign",
            live_url: Some("https://dove-sign-demo.vercel.app"),
        },
        Project {
            title: "RiderX",
            description: "AI-powered rider safety system for KTM bikes that uses a dashcam and \
                          computer vision to detect incorrect posture in real time and alert \
                          the rider instantly",
            technologies: vec!["Teachable Machine", "JavaScript", "TypeScript", "React", "Node.js"],
            github_url: "https://github.com/Abunesh126/RiderX",
            live_url: Some("https://riderx-demo.vercel.app"),
        },
        Project {
            title: "Aura",
            description: "A sophisticated TypeScript-based application focused on user \
                          experience and modern web technologies. Features elegant design \
                          patterns, responsive layouts, and optimized performance for enhanced \
                          user interaction.",
            technologies: vec!["TypeScript", "JavaScript", "HTML", "CSS"],
            github_url: "https://github.com/Abunesh126/Aura",
            live_url: Some("https://aura-demo.vercel.app"),
        },
        Project {
            title: "Clave",
            description: "A radar-signal-based AI model for classifying drones and non-drones \
                          (e.g., drone, aircraft, birds) using micro-Doppler signatures. The \
                          system processes .mat radar files, extracts features, and predicts \
                          the target class with high accuracy.",
            technologies: vec!["Python", "CSS", "HTML", "JavaScript"],
            github_url: "https://github.com/Abunesh126/Clave",
            live_url: Some("https://clave-demo.vercel.app"),
        },
        Project {
            title: "Portfolio Website",
            description: "This luxury-themed portfolio website showcasing modern web \
                          development techniques with beautiful animations and responsive \
                          design. Built with cutting-edge technologies for optimal performance.",
            technologies: vec!["CSS", "TypeScript", "JavaScript", "HTML"],
            github_url: "https://github.com/Abunesh126/portfolio",
            live_url: Some("https://abunesh-portfolio.vercel.app"),
        },
    ]
}

/// Returns the footer social links.
#[must_use]
pub fn social_links() -> Vec<SocialLink> {
    vec![
        SocialLink { platform: "Gmail", url: "mailto:abunesh2006@gmail.com" },
        SocialLink { platform: "GitHub", url: "https://github.com/Abunesh126" },
        SocialLink {
            platform: "LinkedIn",
            url: "https://www.linkedin.com/in/abunesh-r-p-803677278/",
        },
        SocialLink {
            platform: "Twitter",
            url: "https://x.com/Abunesh126?t=qc4uEA-YVWUFcbvIzmHMaA&s=09",
        },
    ]
}

/// Returns the contact-section method entries.
#[must_use]
pub fn contact_methods() -> Vec<ContactMethod> {
    vec![
        ContactMethod {
            label: "Email",
            value: "abunesh2006@gmail.com",
            link: "mailto:abunesh2006@gmail.com",
        },
        ContactMethod {
            label: "Phone",
            value: "+91 9042845355",
            link: "tel:+919042845355",
        },
    ]
}
