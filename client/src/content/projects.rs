//! Project showcase entries.

use url::Url;

/// Whether a project was built for a client or on personal time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProjectKind {
    Personal,
    Client,
}

impl ProjectKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Personal => "Personal",
            Self::Client => "Client",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub link: &'static str,
    pub thumbnail: &'static str,
    pub kind: ProjectKind,
}

impl Project {
    pub fn display_domain(&self) -> String {
        display_domain(self.link)
    }
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "HexLab",
        description: "A comprehensive color tool that converts Hex to RGB, HSL, CMYK, and generates color shades and harmonies.",
        link: "https://hexlab-tool.vercel.app/",
        thumbnail: "/thumbnails/hexlab.png",
        kind: ProjectKind::Personal,
    },
    Project {
        title: "IloCommute",
        description: "A mobile app built with React Native that helps commuters in Iloilo City find the best jeepney routes.",
        link: "https://github.com/mrkndrei/ilocommute",
        thumbnail: "/thumbnails/ilocommute.jpg",
        kind: ProjectKind::Personal,
    },
    Project {
        title: "Portfolio Website",
        description: "Personal portfolio showcasing my experience as a UI/UX designer and frontend developer.",
        link: "https://mrkndrei.vercel.app",
        thumbnail: "/thumbnails/portfolio.jpg",
        kind: ProjectKind::Personal,
    },
    Project {
        title: "AI Flashcard Generator",
        description: "A tool that generates study flashcards from notes and PDFs using AI integration with n8n and OpenRouter.",
        link: "https://github.com/mrkndrei/ai-flashcards",
        thumbnail: "/thumbnails/ai-flashcard.jpg",
        kind: ProjectKind::Personal,
    },
    Project {
        title: "Jenesia Red",
        description: "Client portfolio landing page built in GoHighLevel.",
        link: "https://jenesiared.com/",
        thumbnail: "/thumbnails/jenesiared.png",
        kind: ProjectKind::Client,
    },
    Project {
        title: "Snaply",
        description: "Website for Snaply built in GoHighLevel.",
        link: "https://heysnaply.com/",
        thumbnail: "/thumbnails/snaply.png",
        kind: ProjectKind::Client,
    },
    Project {
        title: "VIP Scale",
        description: "Corporate website for an agency built in GoHighLevel.",
        link: "https://vipscaleph.com/",
        thumbnail: "/thumbnails/vipscaleph.png",
        kind: ProjectKind::Client,
    },
    Project {
        title: "Xfnite",
        description: "Landing page for Xfnite built in GoHighLevel.",
        link: "https://vipscaleph.com/xfnite",
        thumbnail: "/thumbnails/xfnite.png",
        kind: ProjectKind::Client,
    },
];

/// Host of `link` without a leading `www.`; the raw input when it does not
/// parse as an absolute URL with a host.
pub fn display_domain(link: &str) -> String {
    let Ok(parsed) = Url::parse(link) else {
        return link.to_owned();
    };
    match parsed.host_str() {
        Some(host) => host.strip_prefix("www.").unwrap_or(host).to_owned(),
        None => link.to_owned(),
    }
}
