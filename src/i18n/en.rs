use super::*;

pub(super) static EN: Translations = Translations {
    nav: NavStrings {
        about: "About",
        skills: "Skills",
        projects: "Projects",
        blog: "Blog",
        contact: "Contact",
    },
    hero: HeroStrings {
        greeting: "Hi, I'm",
        name: "Dat Truong Thanh",
        view_projects: "View Projects",
        contact_me: "Contact Me",
    },
    about: AboutStrings {
        title: "About",
        heading: "I am a curious and passionate developer.",
        paragraph1: "I'm a backend engineer who thrives on designing scalable, maintainable systems. With deep expertise in Java and the Spring ecosystem, I focus on crafting clean APIs, optimizing database performance, and architecting solutions that handle real-world scale.",
        paragraph2: "My work spans RESTful API development, microservice architecture, system design, and performance optimization. I'm passionate about writing code that's not just functional, but elegant, and about sharing what I learn through technical writing.",
        download_cv: "Download CV",
    },
    skills: SkillsStrings {
        title: "Skills",
        heading: "Tools & technologies.",
        backend: "Backend",
        database: "Database",
        devops: "DevOps",
    },
    projects: ProjectsStrings {
        title: "Projects",
        heading: "Selected work.",
        code: "Code",
        demo: "Demo",
        preview: "Preview",
        month: "month",
        months: "months",
        year: "year",
        years: "years",
        present: "Present",
        less_than_month: "< 1 month",
        overview: "Overview",
        project_info: "Project Information",
        customer: "Customer",
        team_size: "Team Size",
        members: "members",
        technologies: "Technologies Used",
        back_to_home: "Back to Home",
        project_not_found: "Project Not Found",
        project_not_found_desc: "The project you're looking for doesn't exist.",
    },
    blog: BlogStrings {
        title: "Blog",
        heading: "Latest writing.",
        latest_articles: "Latest Articles",
        subtitle: "Thoughts on software development, architecture, and technology. Sharing knowledge and experiences from building scalable systems.",
        read_more: "Read More",
        min_read: "min read",
        previous: "Previous",
        next: "Next",
    },
    contact: ContactStrings {
        title: "Contact",
        heading: "Get in touch.",
        subtitle: "Have a project in mind or want to chat? Drop me a message or connect on social.",
        name: "Name",
        name_placeholder: "Dat Truong Thanh",
        email: "Email",
        email_placeholder: "you@example.com",
        message: "Message",
        message_placeholder: "Your message...",
        send: "Send Message",
        success_message: "Thanks for reaching out! (This is a demo, no message was sent.)",
    },
    footer: FooterStrings {
        built_with: "Built with Rust",
        rights: "All rights reserved.",
    },
    not_found: NotFoundStrings {
        title: "404",
        heading: "Page not found",
        description: "The page you're looking for doesn't exist or has been moved.",
        back_home: "Back to Home",
    },
    language: LanguageStrings {
        english: "English",
        vietnamese: "Vietnamese",
        code: "ENG",
        code_vi: "VI",
    },
    date: DateStrings {
        locale: "en-US",
        short_months: [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ],
        long_months: [
            "January",
            "February",
            "March",
            "April",
            "May",
            "June",
            "July",
            "August",
            "September",
            "October",
            "November",
            "December",
        ],
        full_date_order: FullDateOrder::MonthDayYear,
    },
};
