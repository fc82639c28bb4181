pub(crate) struct Language {
  pub(crate) code: &'static str,
  pub(crate) label: &'static str,
}

impl Language {
  pub(crate) fn all() -> &'static [Language] {
    &[
      Language { code: "none", label: "original" },
      Language { code: "AF", label: "Afrikaans" },
      Language { code: "SQ", label: "Albanian" },
      Language { code: "AR", label: "Arabic" },
      Language { code: "HY", label: "Armenian" },
      Language { code: "EU", label: "Basque" },
      Language { code: "BN", label: "Bengali" },
      Language { code: "BG", label: "Bulgarian" },
      Language { code: "CA", label: "Catalan" },
      Language { code: "KM", label: "Cambodian" },
      Language { code: "ZH", label: "Chinese (Mandarin)" },
      Language { code: "HR", label: "Croatian" },
      Language { code: "CS", label: "Czech" },
      Language { code: "DA", label: "Danish" },
      Language { code: "NL", label: "Dutch" },
      Language { code: "EN", label: "English" },
      Language { code: "ET", label: "Estonian" },
      Language { code: "FJ", label: "Fiji" },
      Language { code: "FI", label: "Finnish" },
      Language { code: "FR", label: "French" },
      Language { code: "KA", label: "Georgian" },
      Language { code: "DE", label: "German" },
      Language { code: "EL", label: "Greek" },
      Language { code: "GU", label: "Gujarati" },
      Language { code: "HE", label: "Hebrew" },
      Language { code: "HI", label: "Hindi" },
      Language { code: "HU", label: "Hungarian" },
      Language { code: "IS", label: "Icelandic" },
      Language { code: "ID", label: "Indonesian" },
      Language { code: "GA", label: "Irish" },
      Language { code: "IT", label: "Italian" },
      Language { code: "JA", label: "Japanese" },
      Language { code: "JW", label: "Javanese" },
      Language { code: "KO", label: "Korean" },
      Language { code: "LA", label: "Latin" },
      Language { code: "LV", label: "Latvian" },
      Language { code: "LT", label: "Lithuanian" },
      Language { code: "MK", label: "Macedonian" },
      Language { code: "MS", label: "Malay" },
      Language { code: "ML", label: "Malayalam" },
      Language { code: "MT", label: "Maltese" },
      Language { code: "MI", label: "Maori" },
      Language { code: "MR", label: "Marathi" },
      Language { code: "MN", label: "Mongolian" },
      Language { code: "NE", label: "Nepali" },
      Language { code: "NO", label: "Norwegian" },
      Language { code: "FA", label: "Persian" },
      Language { code: "PL", label: "Polish" },
      Language { code: "PT", label: "Portuguese" },
      Language { code: "PA", label: "Punjabi" },
      Language { code: "QU", label: "Quechua" },
      Language { code: "RO", label: "Romanian" },
      Language { code: "RU", label: "Russian" },
      Language { code: "SM", label: "Samoan" },
      Language { code: "SR", label: "Serbian" },
      Language { code: "SK", label: "Slovak" },
      Language { code: "SL", label: "Slovenian" },
      Language { code: "ES", label: "Spanish" },
      Language { code: "SW", label: "Swahili" },
      Language { code: "SV", label: "Swedish" },
      Language { code: "TA", label: "Tamil" },
      Language { code: "TT", label: "Tatar" },
      Language { code: "TE", label: "Telugu" },
      Language { code: "TH", label: "Thai" },
      Language { code: "BO", label: "Tibetan" },
      Language { code: "TO", label: "Tonga" },
      Language { code: "TR", label: "Turkish" },
      Language { code: "UK", label: "Ukrainian" },
      Language { code: "UR", label: "Urdu" },
      Language { code: "UZ", label: "Uzbek" },
      Language { code: "VI", label: "Vietnamese" },
      Language { code: "CY", label: "Welsh" },
      Language { code: "XH", label: "Xhosa" },
    ]
  }

  pub(crate) fn request_code(&self) -> Option<&'static str> {
    (self.code != "none").then_some(self.code)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn first_entry_is_the_unfiltered_sentinel() {
    let first = &Language::all()[0];

    assert_eq!(first.code, "none");
    assert_eq!(first.request_code(), None);
  }

  #[test]
  fn real_languages_expose_their_code() {
    let french = Language::all()
      .iter()
      .find(|language| language.label == "French")
      .unwrap();

    assert_eq!(french.request_code(), Some("FR"));
  }

  #[test]
  fn codes_are_unique() {
    let mut codes: Vec<&str> =
      Language::all().iter().map(|language| language.code).collect();

    codes.sort_unstable();
    codes.dedup();

    assert_eq!(codes.len(), Language::all().len());
  }
}
