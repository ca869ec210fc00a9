use super::*;

pub(super) static VI: Translations = Translations {
    nav: NavStrings {
        about: "Giới thiệu",
        skills: "Kỹ năng",
        projects: "Dự án",
        blog: "Blog",
        contact: "Liên hệ",
    },
    hero: HeroStrings {
        greeting: "Xin chào, tôi là",
        name: "Trương Thành Đạt",
        view_projects: "Xem dự án",
        contact_me: "Liên hệ",
    },
    about: AboutStrings {
        title: "Giới thiệu",
        heading: "Tôi là một lập trình viên tò mò và đam mê.",
        paragraph1: "Tôi là một kỹ sư backend chuyên thiết kế các hệ thống có khả năng mở rộng và bảo trì. Với chuyên môn sâu về Java và hệ sinh thái Spring, tôi tập trung vào việc tạo ra các API sạch, tối ưu hóa hiệu suất cơ sở dữ liệu và thiết kế các giải pháp xử lý quy mô thực tế.",
        paragraph2: "Công việc của tôi bao gồm phát triển RESTful API, kiến trúc microservice, thiết kế hệ thống và tối ưu hóa hiệu suất. Tôi đam mê viết code không chỉ hoạt động tốt mà còn tinh tế, và chia sẻ những gì tôi học được thông qua viết kỹ thuật.",
        download_cv: "Tải CV",
    },
    skills: SkillsStrings {
        title: "Kỹ năng",
        heading: "Công nghệ & công cụ.",
        backend: "Backend",
        database: "Cơ sở dữ liệu",
        devops: "DevOps",
    },
    projects: ProjectsStrings {
        title: "Dự án",
        heading: "Dự án nổi bật.",
        code: "Code",
        demo: "Demo",
        preview: "Xem trước",
        month: "tháng",
        months: "tháng",
        year: "năm",
        years: "năm",
        present: "Hiện tại",
        less_than_month: "< 1 tháng",
        overview: "Tổng quan",
        project_info: "Thông tin dự án",
        customer: "Khách hàng",
        team_size: "Quy mô nhóm",
        members: "thành viên",
        technologies: "Công nghệ sử dụng",
        back_to_home: "Về trang chủ",
        project_not_found: "Không tìm thấy dự án",
        project_not_found_desc: "Dự án bạn đang tìm kiếm không tồn tại.",
    },
    blog: BlogStrings {
        title: "Blog",
        heading: "Bài viết mới nhất.",
        latest_articles: "Bài viết mới nhất",
        subtitle: "Suy nghĩ về phát triển phần mềm, kiến trúc và công nghệ. Chia sẻ kiến thức và kinh nghiệm từ việc xây dựng các hệ thống có khả năng mở rộng.",
        read_more: "Đọc thêm",
        min_read: "phút đọc",
        previous: "Bài trước",
        next: "Bài tiếp theo",
    },
    contact: ContactStrings {
        title: "Liên hệ",
        heading: "Liên hệ với tôi.",
        subtitle: "Có một dự án trong đầu hay muốn trò chuyện? Gửi tin nhắn hoặc kết nối qua mạng xã hội.",
        name: "Tên",
        name_placeholder: "Trương Thành Đạt",
        email: "Email",
        email_placeholder: "ban@vidu.com",
        message: "Tin nhắn",
        message_placeholder: "Tin nhắn của bạn...",
        send: "Gửi tin nhắn",
        success_message: "Cảm ơn bạn đã liên hệ! (Đây là bản demo, không có tin nhắn nào được gửi.)",
    },
    footer: FooterStrings {
        built_with: "Được xây dựng với Rust",
        rights: "Bảo lưu mọi quyền.",
    },
    not_found: NotFoundStrings {
        title: "404",
        heading: "Không tìm thấy trang",
        description: "Trang bạn đang tìm kiếm không tồn tại hoặc đã được di chuyển.",
        back_home: "Về trang chủ",
    },
    language: LanguageStrings {
        english: "Tiếng Anh",
        vietnamese: "Tiếng Việt",
        code: "ENG",
        code_vi: "VI",
    },
    date: DateStrings {
        locale: "vi-VN",
        short_months: [
            "thg 1", "thg 2", "thg 3", "thg 4", "thg 5", "thg 6", "thg 7", "thg 8", "thg 9",
            "thg 10", "thg 11", "thg 12",
        ],
        long_months: [
            "tháng 1",
            "tháng 2",
            "tháng 3",
            "tháng 4",
            "tháng 5",
            "tháng 6",
            "tháng 7",
            "tháng 8",
            "tháng 9",
            "tháng 10",
            "tháng 11",
            "tháng 12",
        ],
        full_date_order: FullDateOrder::DayMonthYear,
    },
};
