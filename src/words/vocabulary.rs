//! Fixed Japanese → romaji vocabulary.
//!
//! Transcriptions use the long-vowel spelling (`toukyou`, `ookii`) and are
//! compared case-insensitively. Entries are unique by display word.

pub const VOCABULARY: &[(&str, &str)] = &[
    ("こんにちは", "konnichiwa"), ("ありがとう", "arigatou"), ("さようなら", "sayounara"), ("おやすみ", "oyasumi"),
    ("おはよう", "ohayou"), ("はい", "hai"), ("いいえ", "iie"), ("ごめんなさい", "gomen nasai"),
    ("すみません", "sumimasen"), ("いただきます", "itadakimasu"), ("ごちそうさま", "gochisousama"), ("美味しい", "oishii"),
    ("楽しい", "tanoshii"), ("日本", "nihon"), ("東京", "toukyou"), ("寿司", "sushi"),
    ("ラーメン", "ramen"), ("桜", "sakura"), ("猫", "neko"), ("犬", "inu"),
    ("山", "yama"), ("川", "kawa"), ("海", "umi"), ("空", "sora"),
    ("星", "hoshi"), ("月", "tsuki"), ("太陽", "taiyou"), ("雨", "ame"),
    ("風", "kaze"), ("雪", "yuki"), ("花", "hana"), ("木", "ki"),
    ("水", "mizu"), ("火", "hi"), ("土", "tsuchi"), ("金", "kane"),
    ("銀", "gin"), ("銅", "dou"), ("鉄", "tetsu"), ("紙", "kami"),
    ("ペン", "pen"), ("本", "hon"), ("学校", "gakkou"), ("先生", "sensei"),
    ("生徒", "seito"), ("友達", "tomodachi"), ("家族", "kazoku"), ("父", "chichi"),
    ("母", "haha"), ("兄", "ani"), ("弟", "otouto"), ("姉", "ane"),
    ("妹", "imouto"), ("男", "otoko"), ("女", "onna"), ("子供", "kodomo"),
    ("大人", "otona"), ("時間", "jikan"), ("今日", "kyou"), ("明日", "ashita"),
    ("昨日", "kinou"), ("週", "shuu"), ("年", "toshi"), ("朝", "asa"),
    ("昼", "hiru"), ("夜", "yoru"), ("数字", "suuji"), ("大きい", "ookii"),
    ("小さい", "chiisai"), ("高い", "takai"), ("低い", "hikui"), ("長い", "nagai"),
    ("短い", "mijikai"), ("速い", "hayai"), ("遅い", "osoi"), ("暑い", "atsui"),
    ("寒い", "samui"), ("熱い", "atsui"), ("冷たい", "tsumetai"), ("新しい", "atarashii"),
    ("古い", "furui"), ("良い", "yoi"), ("悪い", "warui"), ("可愛い", "kawaii"),
    ("美しい", "utsukushii"), ("面白い", "omoshiroi"), ("つまらない", "tsumaranai"), ("難しい", "muzukashii"),
    ("簡単", "kantan"), ("白い", "shiroi"), ("黒い", "kuroi"), ("赤い", "akai"),
    ("青い", "aoi"), ("黄色い", "kiiroi"), ("緑", "midori"), ("茶色", "chairo"),
    ("紫", "murasaki"), ("ピンク", "pinku"), ("オレンジ", "orenji"), ("灰色", "haiiro"),
    ("金色", "kiniro"), ("銀色", "giniro"), ("透明", "toumei"),
];
