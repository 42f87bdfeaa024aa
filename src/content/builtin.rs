//! Built-in content for Unit 23, "O Hekal" (nature and environment).
//!
//! Two vocabulary tables exist for the unit. `Moedict` lists dictionary-verified words;
//! `Sentences` lists the words as they occur in the example sentences, citing the
//! corpus row each came from. Sentences and quiz questions are shared.

use crate::models::{QuizItem, SentenceEntry, VocabEntry};

pub const UNIT_TITLE: &str = "Unit 23: O Hekal";
pub const UNIT_SUBTITLE: &str = "大自然與環境 (Nature)";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Dataset {
    #[default]
    Moedict,
    Sentences,
}

impl Dataset {
    pub fn label(self) -> &'static str {
        match self {
            Dataset::Moedict => "Moedict",
            Dataset::Sentences => "Sentence-derived",
        }
    }
}

pub fn vocabulary(dataset: Dataset) -> Vec<VocabEntry> {
    let rows: &[(&str, &str, &str, &str)] = match dataset {
        Dataset::Moedict => &[
            ("Hekal", "外部 / 世界 / 自然", "🌍", "Moedict: hekal"),
            ("Riyar", "海洋 / 海", "🌊", "Moedict: riyar"),
            ("Omah", "田地 / 農田", "🌾", "Moedict: omah"),
            ("Kilang", "樹 / 木頭", "🌳", "Moedict: kilang"),
            ("Fokeloh", "石頭", "🪨", "Moedict: fokeloh"),
            ("Fanaw", "池塘 / 湖泊", "💧", "Moedict: fanaw"),
            ("Cidal", "太陽", "☀️", "Moedict: cidal"),
            ("Folad", "月亮 / 月份", "🌙", "Moedict: folad"),
            ("Kakarayan", "天空", "☁️", "Moedict: kakarayan"),
            ("Talo'an", "工寮", "🛖", "Moedict: talo'an"),
            ("Foting", "魚", "🐟", "Moedict: foting"),
            ("Mifoting", "捕魚", "🎣", "Moedict: mi-foting"),
            ("Ma'efer", "飛", "🦅", "Moedict: ma'efer"),
            ("Matayal", "工作", "⚒️", "Moedict: matayal"),
        ],
        Dataset::Sentences => &[
            ("Talariyar", "去海邊 / 到海上", "🌊", "Row 223"),
            ("Mifoting", "捕魚", "🎣", "Row 223"),
            ("Mama", "爸爸", "👨", "Row 223"),
            ("Ma'orad", "下雨", "🌧️", "Row 259"),
            ("Kilang", "樹 / 木頭", "🌳", "Row 259"),
            ("Maomah", "做農活", "🌾", "Row 676"),
            ("Ma'efer", "飛", "🦅", "Row 798"),
            ("Kakarayan", "天空", "☁️", "Row 798"),
            ("Matayal", "工作", "⚒️", "Row 732"),
            ("Cidal", "太陽", "☀️", "Row 732"),
            ("Miparakar", "放魚籠陷阱", "🪤", "Row 1453"),
            ("Fanaw", "池塘 / 湖泊", "💧", "Row 1453"),
            ("Hekal", "世界 / 外部", "🌍", "Row 2204"),
            ("Kanatal", "國家 / 島嶼", "🏝️", "Row 2204"),
        ],
    };

    rows.iter()
        .map(|(amis, chinese, icon, source)| VocabEntry::new(amis, chinese, icon, source))
        .collect()
}

pub fn sentences() -> Vec<SentenceEntry> {
    vec![
        SentenceEntry::new("Talariyar a mifoting ci mama.", "爸爸去海上捕魚。", "🌊", "Row 223 (Cleaned)"),
        SentenceEntry::new(
            "Ano ma'orad 'i, mikilidong kita i kala'eno no kilang.",
            "如果下雨呢，我們就去樹下躲避。",
            "🌳",
            "Row 259 (Cleaned)",
        ),
        SentenceEntry::new("Pina ko toki a maomah kami?", "我們幾點做農活(勞動)？", "🌾", "Row 676 (Cleaned)"),
        SentenceEntry::new("Ma'efer kako i kakarayan.", "我在天空飛翔。", "🦅", "Row 798 (Cleaned)"),
        SentenceEntry::new(
            "Tahakowa kami a matayal i la'eno no cidal?",
            "我們在太陽下要工作到何時？",
            "☀️",
            "Row 732 (Cleaned)",
        ),
        SentenceEntry::new("Miparakar i fanaw.", "在池塘放魚籠陷阱。", "💧", "Row 1453 (Cleaned)"),
        SentenceEntry::new(
            "O samakapahay a kanatal i hekal ko Taiwan.",
            "台灣是世界上最美麗的國家。",
            "🌍",
            "Row 2204 (Cleaned)",
        ),
    ]
}

pub fn quiz_pool() -> Vec<QuizItem> {
    vec![
        QuizItem::new(
            "Talariyar a mifoting ci mama.",
            "Talariyar a mifoting ci mama",
            &["爸爸去海上捕魚", "爸爸去山上打獵", "爸爸去田裡工作"],
            "爸爸去海上捕魚",
            "Riyar (海) + Mifoting (捕魚) (Row 223)",
        ),
        QuizItem::new(
            "Ma'efer kako i kakarayan.",
            "Ma'efer kako i kakarayan",
            &["我在天空飛翔", "我在地上走路", "我在水裡游泳"],
            "我在天空飛翔",
            "Ma'efer (飛) + Kakarayan (天空) (Row 798)",
        ),
        QuizItem::new(
            "單字測驗：Fanaw",
            "Fanaw",
            &["池塘/湖泊", "海", "河"],
            "池塘/湖泊",
            "Row 1453: Miparakar i fanaw (在池塘放陷阱)",
        ),
        QuizItem::new(
            "單字測驗：Kilang",
            "Kilang",
            &["樹/木頭", "草", "花"],
            "樹/木頭",
            "Row 259: ...i kala'eno no kilang (在樹下)",
        ),
        QuizItem::new(
            "Tahakowa kami a matayal i la'eno no cidal?",
            "Tahakowa kami a matayal i la'eno no cidal?",
            &["我們在太陽下要工作到何時？", "我們在月亮下要休息到何時？", "我們在樹下要睡到何時？"],
            "我們在太陽下要工作到何時？",
            "Cidal (太陽) + Matayal (工作) (Row 732)",
        ),
        QuizItem::new("單字測驗：Omah", "Omah", &["田地", "家", "學校"], "田地", "種菜的地方 (Row 676)"),
        QuizItem::new(
            "單字測驗：Hekal",
            "Hekal",
            &["世界/外部", "內部", "上面"],
            "世界/外部",
            "Row 2204: ...i hekal (在世界上)",
        ),
        QuizItem::new("單字測驗：Talo'an", "Talo'an", &["工寮", "別墅", "大樓"], "工寮", "田裡的休息小屋"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiz_pool_is_well_formed() {
        for item in quiz_pool() {
            assert!(item.validate().is_ok(), "bad item: {}", item.prompt);
            assert!(item.has_audio());
        }
    }

    #[test]
    fn test_datasets_differ() {
        let moedict = vocabulary(Dataset::Moedict);
        let derived = vocabulary(Dataset::Sentences);

        assert_eq!(moedict.len(), 14);
        assert_ne!(moedict, derived);
        assert!(derived.iter().all(|v| v.source.starts_with("Row ")));
    }
}
