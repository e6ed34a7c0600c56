//! Profile header, about text, experience, and education.

/// Header facts shown at the top of the profile page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub location: &'static str,
    pub role: &'static str,
    /// Contact address; the "Send Email" action is disabled without one.
    pub email: Option<&'static str>,
    /// Downloadable CV under the static asset root.
    pub cv_href: Option<&'static str>,
    pub photo_src: &'static str,
    pub about: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Experience {
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Education {
    pub degree: &'static str,
    pub school: &'static str,
    pub period: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Mark Andrei Bance",
    location: "Iloilo, Philippines",
    role: "Frontend Developer & UI/UX Designer",
    email: None,
    cv_href: Some("/cv.pdf"),
    photo_src: "/profile.jpg",
    about: "I specialize in building intuitive, user-focused applications and experimenting with \
            algorithms to solve real-world problems. With experience in mobile app development, \
            automation workflows, and middleware integration, I'm passionate about creating \
            solutions that simplify everyday tasks.",
};

/// Page description used for the document `<meta name="description">`.
pub const SITE_DESCRIPTION: &str = "Portfolio of Mark Andrei Bance, Frontend Developer & UI/UX Designer. \
    I design and build digital experiences, from intuitive interfaces to efficient web and mobile applications.";

/// Most recent first; the first entry is the current position.
pub const EXPERIENCE: &[Experience] = &[
    Experience { role: "Product Designer", company: "VIP Scale", period: "April 2025 - Present" },
    Experience { role: "Intern", company: "Tanom IT Solutions", period: "Nov 2024 - April 2025" },
];

pub const EDUCATION: Education = Education {
    degree: "BS Information Technology",
    school: "Western Institute of Technology",
    period: "June 2021 - April 2025",
};

/// Document title for the site.
pub fn site_title() -> String {
    format!("{} - Portfolio", PROFILE.name)
}
