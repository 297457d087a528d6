//! Static site content, one table per entity.
//!
//! Every view that shows benefits, instructors, schedules and so on reads from
//! these tables; nothing is duplicated per page. Fields ending in `_key` are
//! translation keys. Everything else is fixed Korean copy and is shown as-is
//! in every language.

use crate::core::links::ExternalLink;
use crate::core::page::Page;

/// Fixed section headings and lead lines.
pub mod copy {
    pub const ACADEMY_NAME: &str = "스타펜싱 아카데미";
    pub const BRAND_SHORT: &str = "스타펜싱";
    pub const HOME_SECTIONS_LEAD: &str = "전문적이고 체계적인 펜싱 교육을 제공합니다";
    pub const ACADEMY_INFO_TITLE: &str = "아카데미 정보";
    pub const ACADEMY_INFO_LEAD: &str = "완벽한 시설과 체계적인 교육 환경을 제공합니다";
    pub const SOCIAL_TITLE: &str = "소셜 미디어";
    pub const FENCING_LEAD: &str = "펜싱은 '검의 예술'이라 불리며, 순간적인 판단력과 전략적 사고, 그리고 정확한 기술이 요구되는 스포츠입니다.";
    pub const BENEFITS_TITLE: &str = "펜싱의 장점";
    pub const BENEFITS_LEAD: &str = "펜싱을 통해 얻을 수 있는 다양한 이점들을 확인해보세요";
    pub const SABRE_BODY: &str = "사브르는 펜싱의 세 종목 중 하나로, 가장 역동적이고 공격적인 특성을 가지고 있습니다. 빠른 공격과 방어가 연속으로 이어지며, 순간적인 판단력과 민첩성이 요구됩니다. 상체 전체가 유효 부위이며, 칼날과 칼등 모두로 공격할 수 있어 다양한 기술을 구사할 수 있습니다.";
    pub const RESULTS_LEAD: &str = "스타펜싱 아카데미 선수반의 뛰어난 성과를 확인해보세요";
    pub const COPYRIGHT: &str = "© 2024 Star Fencing Academy. All rights reserved.";
}

pub mod images {
    pub const LOGO: &str = "/images/logo/star-fencing-logo.png";
    pub const LOGO_WHITE: &str = "/images/logo/star-fencing-logo-white.png";
    pub const LOGO_ALT: &str = "Star Fencing Academy";
}

/// Home page teaser card for one of the detail pages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionCard {
    pub page: Page,
    pub icon: &'static str,
    pub teaser: &'static str,
}

pub const HOME_SECTIONS: [SectionCard; 4] = [
    SectionCard {
        page: Page::About,
        icon: "🏫",
        teaser: "체계적인 시설과 전문 강사진이 있는 스타펜싱 아카데미를 소개합니다.",
    },
    SectionCard {
        page: Page::Fencing,
        icon: "🧠",
        teaser: "펜싱의 매력과 사브르 종목의 특징을 자세히 알아보세요.",
    },
    SectionCard {
        page: Page::Instructors,
        icon: "🏆",
        teaser: "올림픽 금메달리스트를 배출한 최고의 전문 강사진을 만나보세요.",
    },
    SectionCard {
        page: Page::Programs,
        icon: "👥",
        teaser: "연령과 실력에 맞는 다양한 수업 프로그램을 확인해보세요.",
    },
];

/// Academy facts card; the body is one translated line per key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InfoCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub body_keys: &'static [&'static str],
}

pub const INFO_CARDS: [InfoCard; 4] = [
    InfoCard {
        icon: "📍",
        title: "위치",
        body_keys: &["address"],
    },
    InfoCard {
        icon: "📞",
        title: "연락처",
        body_keys: &["phone"],
    },
    InfoCard {
        icon: "🕒",
        title: "운영시간",
        body_keys: &["weekdayHours", "weekendHours"],
    },
    InfoCard {
        icon: "🅿️",
        title: "시설안내",
        body_keys: &["facilities"],
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SocialLink {
    pub link: ExternalLink,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 2] = [
    SocialLink {
        link: ExternalLink::Instagram,
        label: "Instagram @star_fencing",
        icon: "📷",
    },
    SocialLink {
        link: ExternalLink::Kakao,
        label: "카카오채널 스타펜싱아카데미",
        icon: "💬",
    },
];

/// Icon + title + description card (fencing benefits and techniques).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const BENEFITS: [Feature; 4] = [
    Feature {
        icon: "⚡",
        title: "빠른 판단력",
        description: "순간적인 상황 판단과 빠른 대응 능력을 기릅니다.",
    },
    Feature {
        icon: "🧠",
        title: "전략적 사고",
        description: "상대의 움직임을 읽고 전략을 세우는 능력을 개발합니다.",
    },
    Feature {
        icon: "🏆",
        title: "성취감",
        description: "기술 향상과 경기 결과를 통해 성취감을 느낄 수 있습니다.",
    },
    Feature {
        icon: "👥",
        title: "사회성",
        description: "함께 훈련하며 동료들과의 유대감을 형성할 수 있습니다.",
    },
];

pub const TECHNIQUES: [Feature; 4] = [
    Feature {
        icon: "⚔️",
        title: "공격 기술",
        description: "직접 공격, 복합 공격 등 다양한 공격 패턴을 익힙니다.",
    },
    Feature {
        icon: "🛡️",
        title: "방어 기술",
        description: "패리, 회피 등 상대의 공격을 막는 기술을 배웁니다.",
    },
    Feature {
        icon: "⚡",
        title: "반격 기술",
        description: "상대의 공격을 막은 후 즉시 반격하는 기술을 연마합니다.",
    },
    Feature {
        icon: "👟",
        title: "발놀림",
        description: "전진, 후진, 런지 등 효과적인 이동 기술을 습득합니다.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Instructor {
    pub name: &'static str,
    pub role_key: &'static str,
    pub image: &'static str,
    /// Translated multi-line summary, shown in the compact (one-page) card.
    pub profile_key: Option<&'static str>,
    pub achievements: &'static [&'static str],
    pub education: &'static [&'static str],
    pub experience: &'static [&'static str],
}

pub const INSTRUCTORS: [Instructor; 2] = [
    Instructor {
        name: "황광욱",
        role_key: "headInstructor",
        image: "/images/instructors/hwang-kwangwook.jpg",
        profile_key: Some("hwangProfile"),
        achievements: &[
            "2012년 런던올림픽 금메달 오은석·구본길 지도",
            "세계청소년 및 유소년 메달리스트 다수배출",
            "전문 스포츠지도자 1급",
            "교원자격 (중등학교2급 정교사)",
            "아시안게임 및 올림픽메달리스트 다수배출",
            "대한체육회 2002펜싱부문 모범심판",
        ],
        education: &[
            "홍익사범대학교 부속고등학교 졸업",
            "한국체육대학교 체육교육과 졸업",
            "국군체육부대 제대",
        ],
        experience: &[
            "前 청소년 국가대표",
            "前 국가대표",
            "前 오성중/고등학교 코치",
            "前 밀양대학교 펜싱팀 감독",
            "前 서울시청 펜싱팀 코치",
            "前 국민체육진흥공단 코치",
            "前 국가대표상비군 코치",
            "前 청소년국가대표 코치",
            "前 서울펜싱협회 스포츠공정위원회 위원 (2017~2018)",
            "前 서울시펜싱협회 부회장 (2019~2024)",
            "前 일산펜싱클럽 대표",
            "現 스타펜싱아카데미 대표",
        ],
    },
    Instructor {
        name: "강철웅",
        role_key: "instructor",
        image: "/images/instructors/kang-cheolwoong.jpg",
        profile_key: None,
        achievements: &["현역 선수로 활동 중", "대학부 대회 다수 입상", "청소년 지도 경험"],
        education: &["체육대학교 재학 중"],
        experience: &["現 스타펜싱아카데미 코치", "청소년 펜싱 지도"],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassKind {
    Hobby,
    Athlete,
}

impl ClassKind {
    pub fn label_key(self) -> &'static str {
        match self {
            ClassKind::Hobby => "hobby",
            ClassKind::Athlete => "athlete",
        }
    }

    pub fn css_modifier(self) -> &'static str {
        match self {
            ClassKind::Hobby => "program-class--hobby",
            ClassKind::Athlete => "program-class--athlete",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgramClass {
    pub kind: ClassKind,
    /// One line per schedule slot.
    pub schedule: &'static [&'static str],
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgramCategory {
    pub icon: &'static str,
    pub category_key: &'static str,
    pub classes: &'static [ProgramClass],
}

const WEEKDAY_EVENING: &str = "평일 (화/수/목/금) 20:30 ~ 22:00";
const WEEKEND_AFTERNOON: &str = "주말 (토/일) 16:30 ~ 18:00";

pub const PROGRAMS: [ProgramCategory; 3] = [
    ProgramCategory {
        icon: "🏫",
        category_key: "elementary",
        classes: &[
            ProgramClass {
                kind: ClassKind::Hobby,
                schedule: &["평일 (화/수/목/금) 14:50 ~ 15:50"],
                description: "펜싱의 기본기를 재미있게 배우는 시간",
            },
            ProgramClass {
                kind: ClassKind::Athlete,
                schedule: &["평일 (화/수/목/금) 16:00 ~ 17:30"],
                description: "체계적인 훈련으로 선수 육성",
            },
        ],
    },
    ProgramCategory {
        icon: "👥",
        category_key: "middleHigh",
        classes: &[
            ProgramClass {
                kind: ClassKind::Hobby,
                schedule: &[WEEKDAY_EVENING, WEEKEND_AFTERNOON],
                description: "학업과 병행하며 펜싱을 즐기는 시간",
            },
            ProgramClass {
                kind: ClassKind::Athlete,
                schedule: &["평일 (화/수/목/금) 18:30 ~ 20:30", "주말 (토/일) 14:00 ~ 16:00"],
                description: "본격적인 선수 양성 프로그램",
            },
        ],
    },
    ProgramCategory {
        icon: "🏆",
        category_key: "adult",
        classes: &[ProgramClass {
            kind: ClassKind::Hobby,
            schedule: &[WEEKDAY_EVENING, WEEKEND_AFTERNOON],
            description: "성인을 위한 펜싱 체험 및 취미 활동",
        }],
    },
];

pub const ATHLETE_RESULTS: [&str; 4] = [
    "2023' 소년체전 서울시 대표 선발 (개인전 은메달)",
    "2024' 소년체전 서울시 대표 선발",
    "2025' 소년체전 서울시 대표 선발 (개인전 출전예정)",
    "2025' 대한중고펜싱연맹 대회 개인전 3위",
];

pub const CLASS_NOTES: [&str; 4] = [
    "남녀 중등부 선수반 운영",
    "남녀 초등부 선수반 모집중",
    "초/중/고/성인/동호인 취미반 상시 모집",
    "개인 레슨 예약 가능",
];

/// Every translation key carried by the tables above.
pub fn translation_keys() -> Vec<&'static str> {
    let mut keys: Vec<&'static str> = Page::ALL.iter().map(|p| p.label_key()).collect();
    keys.extend(INFO_CARDS.iter().flat_map(|card| card.body_keys.iter().copied()));
    for instructor in &INSTRUCTORS {
        keys.push(instructor.role_key);
        keys.extend(instructor.profile_key);
    }
    for program in &PROGRAMS {
        keys.push(program.category_key);
        keys.extend(program.classes.iter().map(|class| class.kind.label_key()));
    }
    keys.sort_unstable();
    keys.dedup();
    keys
}
