//! ISO 639-2 language codes
//!
//! Bibliographic (`/B`) codes are listed first; terminology (`/T`) variants
//! resolve to the same name.

/// Convert an ISO 639-2 code to its English language name
pub fn language_name(code: &str) -> Option<&'static str> {
    let name = match code.trim().to_lowercase().as_str() {
        "aar" => "Afar",
        "abk" => "Abkhaz",
        "ace" => "Achinese",
        "afr" => "Afrikaans",
        "aka" => "Akan",
        "akk" => "Akkadian",
        "alb" | "sqi" => "Albanian",
        "ale" => "Aleut",
        "amh" => "Amharic",
        "ang" => "English, Old (ca. 450-1100)",
        "ara" => "Arabic",
        "arc" => "Aramaic",
        "arm" | "hye" => "Armenian",
        "asm" => "Assamese",
        "ava" => "Avaric",
        "ave" => "Avestan",
        "aym" => "Aymara",
        "aze" => "Azerbaijani",
        "bak" => "Bashkir",
        "bam" => "Bambara",
        "baq" | "eus" => "Basque",
        "bel" => "Belarusian",
        "ben" => "Bengali",
        "ber" => "Berber (Other)",
        "bih" => "Bihari (Other)",
        "bis" => "Bislama",
        "bos" => "Bosnian",
        "bre" => "Breton",
        "bul" => "Bulgarian",
        "bur" | "mya" => "Burmese",
        "cat" => "Catalan",
        "ceb" => "Cebuano",
        "cha" => "Chamorro",
        "che" => "Chechen",
        "chi" | "zho" => "Chinese",
        "chr" => "Cherokee",
        "chu" => "Church Slavic",
        "chv" => "Chuvash",
        "cop" => "Coptic",
        "cor" => "Cornish",
        "cos" => "Corsican",
        "cre" => "Cree",
        "cze" | "ces" => "Czech",
        "dan" => "Danish",
        "dut" | "nld" => "Dutch",
        "dzo" => "Dzongkha",
        "egy" => "Egyptian",
        "enm" => "English, Middle (1100-1500)",
        "eng" => "English",
        "epo" => "Esperanto",
        "est" => "Estonian",
        "ewe" => "Ewe",
        "fao" => "Faroese",
        "fij" => "Fijian",
        "fil" => "Filipino",
        "fin" => "Finnish",
        "fre" | "fra" => "French",
        "frm" => "French, Middle (ca. 1300-1600)",
        "fro" => "French, Old (ca. 842-1300)",
        "fry" => "Frisian",
        "ful" => "Fula",
        "geo" | "kat" => "Georgian",
        "ger" | "deu" => "German",
        "gez" => "Ethiopic",
        "gla" => "Scottish Gaelic",
        "gle" => "Irish",
        "glg" => "Galician",
        "glv" => "Manx",
        "gmh" => "German, Middle High (ca. 1050-1500)",
        "goh" => "German, Old High (ca. 750-1050)",
        "got" => "Gothic",
        "grc" => "Greek, Ancient (to 1453)",
        "gre" | "ell" => "Greek, Modern (1453- )",
        "grn" => "Guarani",
        "guj" => "Gujarati",
        "hat" => "Haitian French Creole",
        "hau" => "Hausa",
        "haw" => "Hawaiian",
        "heb" => "Hebrew",
        "her" => "Herero",
        "hin" => "Hindi",
        "hmn" => "Hmong",
        "hrv" => "Croatian",
        "hun" => "Hungarian",
        "ibo" => "Igbo",
        "ice" | "isl" => "Icelandic",
        "ido" => "Ido",
        "iku" => "Inuktitut",
        "ina" => "Interlingua (International Auxiliary Language Association)",
        "ind" => "Indonesian",
        "ipk" => "Inupiaq",
        "ita" => "Italian",
        "jav" => "Javanese",
        "jpn" => "Japanese",
        "kal" => "Kalâtdlisut",
        "kan" => "Kannada",
        "kas" => "Kashmiri",
        "kaz" => "Kazakh",
        "khm" => "Khmer",
        "kik" => "Kikuyu",
        "kin" => "Kinyarwanda",
        "kir" => "Kyrgyz",
        "kor" => "Korean",
        "kur" => "Kurdish",
        "lad" => "Ladino",
        "lao" => "Lao",
        "lat" => "Latin",
        "lav" => "Latvian",
        "lin" => "Lingala",
        "lit" => "Lithuanian",
        "ltz" => "Luxembourgish",
        "lug" => "Ganda",
        "mac" | "mkd" => "Macedonian",
        "mah" => "Marshallese",
        "mal" => "Malayalam",
        "mao" | "mri" => "Maori",
        "mar" => "Marathi",
        "may" | "msa" => "Malay",
        "mlg" => "Malagasy",
        "mlt" => "Maltese",
        "mon" => "Mongolian",
        "mul" => "Multiple languages",
        "nau" => "Nauru",
        "nav" => "Navajo",
        "nep" => "Nepali",
        "nno" => "Norwegian (Nynorsk)",
        "nob" => "Norwegian (Bokmål)",
        "non" => "Old Norse",
        "nor" => "Norwegian",
        "oci" => "Occitan (post-1500)",
        "ori" => "Oriya",
        "oss" => "Ossetic",
        "ota" => "Turkish, Ottoman",
        "pan" => "Panjabi",
        "per" | "fas" => "Persian",
        "pli" => "Pali",
        "pol" => "Polish",
        "por" => "Portuguese",
        "pro" => "Provençal (to 1500)",
        "pus" => "Pushto",
        "que" => "Quechua",
        "roh" => "Raeto-Romance",
        "rum" | "ron" => "Romanian",
        "run" => "Rundi",
        "rus" => "Russian",
        "san" => "Sanskrit",
        "sco" => "Scots",
        "sin" => "Sinhalese",
        "slo" | "slk" => "Slovak",
        "slv" => "Slovenian",
        "sme" => "Northern Sami",
        "smo" => "Samoan",
        "sna" => "Shona",
        "snd" => "Sindhi",
        "som" => "Somali",
        "sot" => "Sotho",
        "spa" => "Spanish",
        "srp" => "Serbian",
        "ssw" => "Swazi",
        "sun" => "Sundanese",
        "swa" => "Swahili",
        "swe" => "Swedish",
        "syr" => "Syriac, Modern",
        "tah" => "Tahitian",
        "tam" => "Tamil",
        "tat" => "Tatar",
        "tel" => "Telugu",
        "tgk" => "Tajik",
        "tgl" => "Tagalog",
        "tha" => "Thai",
        "tib" | "bod" => "Tibetan",
        "tir" => "Tigrinya",
        "ton" => "Tongan",
        "tsn" => "Tswana",
        "tso" => "Tsonga",
        "tuk" => "Turkmen",
        "tur" => "Turkish",
        "twi" => "Twi",
        "uig" => "Uighur",
        "ukr" => "Ukrainian",
        "und" => "Undetermined",
        "urd" => "Urdu",
        "uzb" => "Uzbek",
        "ven" => "Venda",
        "vie" => "Vietnamese",
        "wel" | "cym" => "Welsh",
        "wln" => "Walloon",
        "wol" => "Wolof",
        "xho" => "Xhosa",
        "yid" => "Yiddish",
        "yor" => "Yoruba",
        "zap" => "Zapotec",
        "zul" => "Zulu",
        "zxx" => "No linguistic content",
        _ => return None,
    };
    Some(name)
}
