/// One numbered design principle, with its Arabic caption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pillar {
    pub num: &'static str,
    pub title: &'static str,
    pub body: &'static str,
    pub arabic: &'static str,
}

pub const PILLARS: &[Pillar] = &[
    Pillar {
        num: "01",
        title: "Space as Narrative",
        body: "Architecture is the art of storytelling through space. Every corridor, every threshold, every room is a chapter — and the inhabitant is the reader.",
        arabic: "الفضاء كرواية",
    },
    Pillar {
        num: "02",
        title: "Light as Material",
        body: "I treat natural light as the most precious material in my palette. Its quality, direction, and rhythm define the emotional character of every space I design.",
        arabic: "الضوء كمادة",
    },
    Pillar {
        num: "03",
        title: "Heritage in Modernity",
        body: "The geometric wisdom of Islamic architecture — its patterns, proportions, and principles — is not a style but a living language I speak fluently in contemporary form.",
        arabic: "التراث في الحداثة",
    },
    Pillar {
        num: "04",
        title: "Silence in Design",
        body: "The most powerful spaces are those that know when to be quiet. Restraint, negative space, and deliberate emptiness are as important as any element I add.",
        arabic: "الصمت في التصميم",
    },
];

pub struct Quote {
    pub text: &'static str,
    pub author: &'static str,
    pub arabic: &'static str,
}

pub const QUOTE: Quote = Quote {
    text: "Architecture is the learned game, correct and magnificent, of forms assembled in the light.",
    author: "— Le Corbusier",
    arabic: "الهندسة المعمارية لعبة متعلمة، صحيحة وعظيمة",
};
