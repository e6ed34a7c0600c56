//! Skill catalogue and the profile-page highlights.

use super::icon::{Glyph, Icon};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub icon: Icon,
}

/// Named group of skills on the skills page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [Skill],
}

/// Short, icon-less group shown on the profile page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HighlightGroup {
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

const fn image(name: &'static str, url: &'static str) -> Skill {
    Skill { name, icon: Icon::image(url) }
}

const fn glyph(name: &'static str, glyph: Glyph) -> Skill {
    Skill { name, icon: Icon::glyph(glyph) }
}

pub const HIGHLIGHTS: &[HighlightGroup] = &[
    HighlightGroup {
        title: "Web Development & Programming",
        skills: &["JavaScript", "React", "Next.js", "Tailwind CSS", "GSAP"],
    },
    HighlightGroup {
        title: "CMS Platforms",
        skills: &["GoHighLevel", "Kajabi", "Showit", "WordPress", "Framer", "Webflow"],
    },
    HighlightGroup { title: "Design Tools", skills: &["Figma", "Adobe Illustrator", "Adobe Photoshop"] },
];

pub const CATALOGUE: &[SkillCategory] = &[
    SkillCategory {
        title: "Web Development & Programming",
        skills: &[
            image("HTML5", "https://cdn.simpleicons.org/html5"),
            image("CSS3", "https://upload.wikimedia.org/wikipedia/commons/6/62/CSS3_logo.svg"),
            image("JavaScript", "https://cdn.simpleicons.org/javascript"),
            image("React", "https://cdn.simpleicons.org/react"),
            image("Next.js", "https://cdn.simpleicons.org/nextdotjs"),
            image("Tailwind CSS", "https://cdn.simpleicons.org/tailwindcss"),
            image("GSAP", "https://cdn.simpleicons.org/greensock"),
            image("React Native", "https://cdn.simpleicons.org/react"),
            image("Node.js", "https://cdn.simpleicons.org/nodedotjs"),
            image("Express.js", "https://cdn.simpleicons.org/express"),
            image("MongoDB", "https://cdn.simpleicons.org/mongodb"),
            glyph("RESTful APIs", Glyph::Globe),
        ],
    },
    SkillCategory {
        title: "CMS & No-code Platforms",
        skills: &[
            image(
                "GoHighLevel",
                "https://cdn.brandfetch.io/idK-hvK7Lv/w/200/h/200/theme/dark/icon.jpeg?c=1bxid64Mup7aczewSAYMX&t=1692001846848",
            ),
            image(
                "Kajabi",
                "https://cdn.brandfetch.io/idDDho9RcJ/theme/dark/symbol.svg?c=1bxid64Mup7aczewSAYMX&t=1732695044236",
            ),
            image(
                "Showit",
                "https://cdn.brandfetch.io/idl_2Bpl9t/w/32/h/32/theme/dark/logo.png?c=1bxid64Mup7aczewSAYMX&t=1759271339665",
            ),
            image(
                "Shopify",
                "https://cdn.brandfetch.io/idAgPm7IvG/theme/dark/symbol.svg?c=1bxid64Mup7aczewSAYMX&t=1720758863540",
            ),
            image("WordPress", "https://cdn.simpleicons.org/wordpress"),
            image("Framer", "https://cdn.simpleicons.org/framer"),
            image("Webflow", "https://cdn.simpleicons.org/webflow"),
            image("n8n", "https://cdn.simpleicons.org/n8n"),
            image("Zapier", "https://cdn.simpleicons.org/zapier"),
            image(
                "ConvertKit",
                "https://cdn.brandfetch.io/idrz4d2Ld_/w/400/h/400/theme/dark/icon.jpeg?c=1bxid64Mup7aczewSAYMX&t=1736494310937",
            ),
            image("Mailchimp", "https://cdn.simpleicons.org/mailchimp"),
        ],
    },
    SkillCategory {
        title: "Design Tools",
        skills: &[
            image("Figma", "https://cdn.simpleicons.org/figma"),
            image(
                "Adobe Illustrator",
                "https://upload.wikimedia.org/wikipedia/commons/f/fb/Adobe_Illustrator_CC_icon.svg",
            ),
            image(
                "Adobe Photoshop",
                "https://upload.wikimedia.org/wikipedia/commons/a/af/Adobe_Photoshop_CC_icon.svg",
            ),
            image("Adobe XD", "https://upload.wikimedia.org/wikipedia/commons/c/c2/Adobe_XD_CC_icon.svg"),
            image("Canva", "https://cdn.simpleicons.org/canva"),
        ],
    },
    SkillCategory {
        title: "Collaboration & Version Control Tools",
        skills: &[
            image("Git", "https://cdn.simpleicons.org/git"),
            image("GitHub", "https://cdn.simpleicons.org/github"),
            image("ClickUp", "https://cdn.simpleicons.org/clickup"),
            image("Slack", "https://cdn.simpleicons.org/slack"),
            image("Asana", "https://cdn.simpleicons.org/asana"),
            image("Google Workspace", "https://cdn.simpleicons.org/google"),
        ],
    },
    SkillCategory {
        title: "Creative Skills",
        skills: &[
            glyph("UI/UX Design", Glyph::Palette),
            glyph("Wireframing", Glyph::Layout),
            glyph("Prototyping", Glyph::Layers),
            glyph("Branding", Glyph::Award),
            glyph("Logo Design", Glyph::PenTool),
            glyph("Motion Graphics", Glyph::Film),
        ],
    },
];

/// Look up a catalogue skill by exact name.
pub fn find_skill(name: &str) -> Option<&'static Skill> {
    CATALOGUE.iter().flat_map(|c| c.skills.iter()).find(|s| s.name == name)
}
