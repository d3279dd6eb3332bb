//! # 音素 → 口型映射表
//!
//! 两张表都是人工整理的经验数据，顺序与来源保持一致，不要按规则推导。

/// 来自 facefx-phoneme-to-viseme-map.xls 的 SBM 列。
pub(super) const SBM_TABLE: &[(&str, &str)] = &[
    ("P", "BMP"),
    ("B", "BMP"),
    ("T", "D"),
    ("D", "D"),
    ("K", "KG"),
    ("G", "KG"),
    ("M", "BMP"),
    ("N", "NG"),
    ("NG", "NG"),
    ("RA", "Er"),
    ("RU", "Er"),
    ("FLAP", "D"),
    ("PH", "F"),
    ("F", "F"),
    ("V", "F"),
    ("TH", "Th"),
    ("DH", "Th"),
    ("S", "Z"),
    ("Z", "Z"),
    ("SH", "j"),
    ("ZH", "j"),
    ("CX", "Ih"),
    ("X", "Ih"),
    ("GH", "KG"),
    ("HH", "Ih"),
    ("R", "R"),
    ("Y", "OO"),
    ("L", "Th"),
    ("W", "Ao"),
    ("H", "oh"),
    ("TS", "D"),
    ("CH", "KG"),
    ("JH", "KG"),
    // 元音
    ("IY", "EE"),
    ("E", "Ih"),
    ("EN", "Ih"),
    ("EH", "Ih"),
    ("A", "Ao"),
    ("AA", "Ao"),
    ("AAN", "Ao"),
    ("AO", "Ao"),
    ("AON", "Ao"),
    ("O", "Ao"),
    ("ON", "Ih"),
    ("UW", "oh"),
    ("UY", "OO"),
    ("EU", "OO"),
    ("OE", "oh"),
    ("OEN", "oh"),
    ("AH", "Ih"),
    ("IH", "Ih"),
    ("UU", "oh"),
    ("UH", "oh"),
    ("AX", "Ih"),
    ("UX", "Ih"),
    ("AE", "Ih"),
    ("ER", "Er"),
    ("AXR", "Er"),
    ("EXR", "Er"),
    // 双元音
    ("EY", "Ih"),
    ("AW", "Ih"),
    ("AY", "Ih"),
    ("OY", "oh"),
    ("OW", "oh"),
    ("SIL", "_"),
];

/// 从 example_sbm2_mapping.facefx 通过 File->Export XML Actor 导出的映射。
pub(super) const SBM2_TABLE: &[(&str, &str)] = &[
    ("P", "BMP"),
    ("B", "BMP"),
    ("T", "D"),
    ("D", "D"),
    ("M", "BMP"),
    ("RA", "L"),
    ("RU", "Er"),
    ("FLAP", "D"),
    ("PH", "F"),
    ("F", "F"),
    ("V", "F"),
    ("TH", "Th"),
    ("DH", "Th"),
    ("S", "Z"),
    ("Z", "Z"),
    ("R", "R"),
    ("L", "L"),
    ("E", "Eh"),
    ("EN", "Eh"),
    ("EH", "Eh"),
    ("A", "Aa"),
    ("IH", "Ih"),
    ("ER", "Er"),
    ("AXR", "Er"),
    ("EXR", "Er"),
    ("AY", "Ay"),
    ("ON", "Ow"),
    ("AX", "Ah"),
    ("UX", "Ah"),
    ("AE", "Ah"),
    ("AA", "Aa"),
    ("AAN", "Aa"),
    ("AO", "Aa"),
    ("AON", "Aa"),
    ("O", "Ow"),
    ("EY", "Eh"),
    ("UW", "W"),
    ("OW", "Ow"),
    ("OY", "Oy"),
    ("H", "H"),
    ("SH", "Sh"),
    ("ZH", "Sh"),
    ("N", "D"),
    ("NG", "D"),
    ("Y", "Sh"),
    ("UY", "W"),
    ("EU", "W"),
    ("IY", "Ih"),
    ("K", "Kg"),
    ("G", "Kg"),
    ("GH", "Kg"),
    ("JH", "Sh"),
    ("CH", "Sh"),
    ("CX", "H"),
    ("X", "H"),
    ("HH", "H"),
    ("W", "W"),
    ("TS", "Z"),
    ("OE", "W"),
    ("OEN", "W"),
    ("UU", "W"),
    ("AH", "Ah"),
    ("UH", "W"),
    ("AW", "Aw"),
    ("SIL", "_"),
];
