use super::*;

const NAME: &str = "Ayush Kumar";
const ROLE: &str = "Software Engineer";

const COMPOSE_MAIL: &str =
    "https://mail.google.com/mail/?view=cm&fs=1&to=ayushkumar07012005@gmail.com";
const LINKEDIN: &str = "https://www.linkedin.com/in/ayush-vats-23689b202";
const MAILTO: &str = "mailto:ayush.k2024@gmail.com";
const TEL: &str = "tel:+918002811937";

fn badge(label: &'static str, accent: Accent) -> Badge {
    Badge { label, accent }
}

fn heading(eyebrow: &'static str, title: &'static str) -> Heading {
    Heading { eyebrow, title }
}

pub(super) fn portfolio() -> Page {
    Page {
        title: "Ayush Kumar | Software Engineer",
        description: "Portfolio of Ayush Kumar, a full-stack developer working with the MERN stack.",
        sections: vec![
            Section::Hero(hero()),
            Section::About(about()),
            Section::Experience(experience()),
            Section::Projects(projects()),
            Section::Skills(skills()),
            Section::Education(education()),
            Section::Recognition(recognition()),
            Section::Contact(contact()),
            Section::Footer(footer()),
        ],
    }
}

fn hero() -> Hero {
    Hero {
        name: NAME,
        role: ROLE,
        tagline: "A passionate full-stack developer crafting efficient, scalable solutions with the MERN stack. \
                  Focused on clean code, robust architecture, and creating meaningful digital experiences.",
        actions: vec![
            Link::external("Get in Touch", COMPOSE_MAIL, LinkKind::Mail, Icon::Mail),
            Link::external("LinkedIn", LINKEDIN, LinkKind::Web, Icon::Linkedin),
        ],
        scroll_label: "Explore More",
        scroll_target: ABOUT_ANCHOR,
    }
}

fn about() -> About {
    About {
        heading: heading("About Me", "Building Digital Solutions"),
        objective_title: "Career Objective",
        objective: "To work as a Software Engineer applying my knowledge in the field of testing, designing, \
                    and maintenance to cater to the specific needs of the people. I wish to work in a team of \
                    motivated individuals who wish to work towards the advancement of the company and its goals.",
        details_title: "Contact Details",
        details: vec![
            ContactDetail {
                icon: Icon::Mail,
                accent: Accent::Cyan,
                text: "ayush.k2024@gmail.com",
                link: Some(Link::same_tab("ayush.k2024@gmail.com", MAILTO, LinkKind::Mail, Icon::Mail)),
            },
            ContactDetail {
                icon: Icon::Phone,
                accent: Accent::Green,
                text: "+91 8002811937",
                link: None,
            },
            ContactDetail {
                icon: Icon::MapPin,
                accent: Accent::Purple,
                text: "Naugachhia, Bihar (853204)",
                link: None,
            },
        ],
    }
}

fn experience() -> Experience {
    Experience {
        heading: heading("Experience", "Professional Journey"),
        title: "Full-Stack Intern",
        company: "Robo Genious",
        stack: "MERN Stack",
        summary: "Developed a full-featured Note App using the MERN stack (MongoDB, Express.js, React.js, Node.js). \
                  Implemented RESTful APIs, user authentication, and responsive UI components for seamless \
                  note-taking experience.",
    }
}

fn projects() -> Projects {
    Projects {
        heading: heading("Projects", "Featured Work"),
        items: vec![
            Project {
                title: "Note App - Full Stack Application",
                accent: Accent::Cyan,
                badges: vec![
                    badge("MongoDB", Accent::Green),
                    badge("Express.js", Accent::Yellow),
                    badge("React", Accent::Blue),
                    badge("Node.js", Accent::Emerald),
                    badge("C Language", Accent::Green),
                    badge("Arduino", Accent::Teal),
                ],
                summary: "Built a complete note-taking application with user authentication, CRUD operations, \
                          and real-time updates. Implemented secure backend APIs and responsive frontend interface.",
                highlights: vec![
                    "RESTful API design with Express.js and MongoDB integration",
                    "User authentication and session management",
                    "Responsive React components with modern UI patterns",
                ],
            },
            Project {
                title: "Hotel Reservation System",
                accent: Accent::Purple,
                badges: vec![badge("SQL", Accent::Purple), badge("Database Design", Accent::Pink)],
                summary: "Designed and implemented a comprehensive database management system for hotel \
                          operations with normalized tables and efficient query optimization.",
                highlights: vec![
                    "Well-structured database with normalized tables for Guests, Rooms, Reservations, and Payments",
                    "Room availability tracking and booking logic to prevent double bookings",
                    "Real-time room status updates and reservation management",
                ],
            },
            Project {
                title: "Hotel Management System",
                accent: Accent::Orange,
                badges: vec![badge("C Language", Accent::Orange), badge("File Handling", Accent::Amber)],
                summary: "Developed a console-based hotel management application with customer record \
                          management and administrative functions using C programming.",
                highlights: vec![
                    "Room booking system with customer record storage using structures",
                    "Admin functionality for managing room availability and customer data",
                    "File I/O operations for persistent data storage",
                ],
            },
            Project {
                title: "Vertical Farming Light Blinker",
                accent: Accent::Green,
                badges: vec![
                    badge("Arduino", Accent::Teal),
                    badge("C Language", Accent::Cyan),
                    badge("IoT", Accent::Green),
                ],
                summary: "Created an Arduino-based automated lighting system for vertical farming that \
                          simulates day-night cycles to optimize plant growth.",
                highlights: vec![
                    "Automated light control simulating natural day-night cycles",
                    "Energy-efficient timer and sensor integration",
                    "Reduced power consumption and operational costs for indoor farming",
                ],
            },
        ],
    }
}

fn skills() -> Skills {
    Skills {
        heading: heading("Technical Skills", "Tech Stack"),
        groups: vec![
            SkillGroup {
                title: "Languages",
                accent: Accent::Cyan,
                skills: vec![
                    badge("JavaScript", Accent::Cyan),
                    badge("Python", Accent::Blue),
                    badge("C Language", Accent::Orange),
                    badge("SQL", Accent::Purple),
                ],
            },
            SkillGroup {
                title: "Technologies",
                accent: Accent::Purple,
                skills: vec![
                    badge("HTML & CSS", Accent::Pink),
                    badge("React.js", Accent::Blue),
                    badge("Node.js", Accent::Emerald),
                    badge("Express.js", Accent::Yellow),
                    badge("MongoDB", Accent::Green),
                    badge("Arduino", Accent::Teal),
                ],
            },
        ],
    }
}

fn education() -> Education {
    Education {
        heading: heading("Education", "Academic Background"),
        degrees: vec![
            Degree {
                title: "Master of Computer Applications (MCA)",
                institution: "GIFT Autonomous College, Bhubaneswar",
                details: "Biju Patnaik University of Technology • Pursuing",
                accent: Accent::Cyan,
            },
            Degree {
                title: "Bachelor of Computer Applications (BCA)",
                institution: "Marwari College, Bhagalpur",
                details: "Tilka Manjhi University, Bhagalpur, Bihar • 2023 • 65.31%",
                accent: Accent::Purple,
            },
            Degree {
                title: "Intermediate",
                institution: "City College, Bhagalpur, Bihar",
                details: "2020 • 60%",
                accent: Accent::Green,
            },
        ],
    }
}

fn recognition() -> Recognition {
    Recognition {
        achievements_heading: heading("Achievements", "Recognition"),
        achievements: vec![
            Achievement {
                emblem: "🏆",
                title: "2nd Prize in Cricket",
                detail: "College Tournament",
                accent: Accent::Yellow,
            },
            Achievement {
                emblem: "💻",
                title: "C Programming Workshop",
                detail: "Enhanced problem-solving and coding skills",
                accent: Accent::Blue,
            },
        ],
        strengths_heading: heading("Strengths", "Core Values"),
        strengths: vec![
            badge("Discipline", Accent::Cyan),
            badge("Leadership", Accent::Purple),
            badge("Teamwork", Accent::Green),
        ],
    }
}

fn contact() -> Contact {
    Contact {
        heading: heading("Contact", "Get In Touch"),
        intro: "I'm always open to discussing new projects, creative ideas, or opportunities to be part of your vision.",
        profile: ProfileCard {
            title: "Connect on LinkedIn",
            subtitle: "Let's connect professionally",
            cta: "View Profile",
            link: Link::external("Connect on LinkedIn", LINKEDIN, LinkKind::Web, Icon::Linkedin),
        },
        call_to_action: CallToAction {
            title: "Ready to Start a Project?",
            body: "I'm currently available for freelance work and full-time opportunities. \
                   Let's create something amazing together!",
            actions: vec![
                Link::external("Start a Conversation", COMPOSE_MAIL, LinkKind::Mail, Icon::Mail),
                Link::external("View LinkedIn", LINKEDIN, LinkKind::Web, Icon::Linkedin),
            ],
        },
    }
}

fn footer() -> Footer {
    Footer {
        name: NAME,
        role: ROLE,
        links: vec![
            Link::external("LinkedIn", LINKEDIN, LinkKind::Web, Icon::Linkedin)
                .with_accent(Accent::Blue),
            Link::external("Email", COMPOSE_MAIL, LinkKind::Mail, Icon::Mail)
                .with_accent(Accent::Purple),
            Link::same_tab("Phone", TEL, LinkKind::Phone, Icon::Phone).with_accent(Accent::Green),
        ],
        copyright: "© 2025 Ayush Kumar. Built with Rust and WebAssembly.",
    }
}
