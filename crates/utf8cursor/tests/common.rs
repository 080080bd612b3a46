#![allow(missing_docs, dead_code)]

/// Pangrams in a dozen scripts.
pub const QUICK_BROWN: &str = "\
Danish (da): Quizdeltagerne spiste jordbær med fløde, mens cirkusklovnen Wolther spillede på xylofon.
German (de): Falsches Üben von Xylophonmusik quält jeden größeren Zwerg.
Greek (el): Γαζέες καὶ μυρτιὲς δὲν θὰ βρῶ πιὰ στὸ χρυσαφὶ ξέφωτο.
English (en): The quick brown fox jumps over the lazy dog.
Spanish (es): El pingüino Wenceslao hizo kilómetros bajo exhaustiva lluvia y frío, añoraba a su querido cachorro.
French (fr): Le cœur déçu mais l'âme plutôt naïve, Louÿs rêva de crapaüter en canoë au delà des îles.
Irish Gaelic (ga): D'fhuascail Íosa, Úrmhac na hÓighe Beannaithe, pór Éava agus Ádhaimh.
Hungarian (hu): Árvíztűrő tükörfúrógép.
Icelandic (is): Kæmi ný öxi hér ykist þjófum nú bæði víl og ádrepa.
Japanese (jp): いろはにほへとちりぬるを わかよたれそつねならむ うゐのおくやまけふこえて あさきゆめみしゑひもせす
Hebrew (iw): דג סקרן שט בים מאוכזב ולפתע מצא לו חברה איך הקליטה
Polish (pl): Pchnąć w tę łódź jeża lub ośm skrzyń fig.
Russian (ru): Съешь же ещё этих мягких французских булок да выпей чаю.
Thai (th): เป็นมนุษย์สุดประเสริฐเลิศคุณค่า กว่าบรรดาฝูงสัตว์เดรัจฉาน
Turkish (tr): Pijamalı hasta, yağız şoföre çabucak güvendi.
";

/// Symbols, box drawing and supplementary-plane characters.
pub const DEMO: &str = "\
Mathematics and sciences:
  ∮ E⋅da = Q,  n → ∞, ∑ f(i) = ∏ g(i), ∀x∈ℝ: ⌈x⌉ = −⌊−x⌋, α ∧ ¬β = ¬(¬α ∨ β),
  ℕ ⊆ ℕ₀ ⊂ ℤ ⊂ ℚ ⊂ ℝ ⊂ ℂ, ⊥ < a ≠ b ≡ c ≤ d ≪ ⊤ ⇒ (A ⇔ B),
Linguistics and dictionaries:
  ði ıntəˈnæʃənəl fəˈnɛtık əsoʊsiˈeıʃn
Box drawing:
  ╔══╦══╗  ┌──┬──┐  ╭──┬──╮
  ║┌─╨─┐║  │╔═╧═╗│  │╒═╪═╕│
  ╚══╩══╝  └──┴──┘  ╰──┴──╯
Supplementary planes:
  𝔘𝔫𝔦𝔠𝔬𝔡𝔢 😀🎉🦀 𠀀𠜎𪚥 \u{10FFFF}
";

/// Two short pieces of valid text around a handful of malformed sequences.
pub const INVALID: &[u8] = b"Valid start \xCE\xBA\xE1\xBD\xB9\xCF\x83\xCE\xBC\xCE\xB5 then \
\x80 stray, \xC0\xAF overlong, \xED\xA0\x80 surrogate, \xF4\x90\x80\x80 too big, \
\xE6\x97 cut, \xF8\x88\x80\x80\x80 five bytes, \xFE\xFF bad leads, end \xF0\x9F\x98";

/// All named samples, for tests that run over each of them.
pub const SAMPLES: [(&str, &[u8]); 3] = [
    ("quickbrown", QUICK_BROWN.as_bytes()),
    ("demo", DEMO.as_bytes()),
    ("invalid", INVALID),
];

/// A large deterministic document built by repeating the valid samples.
pub fn big() -> String {
    let mut text = String::new();
    for _ in 0..64 {
        text.push_str(QUICK_BROWN);
        text.push_str(DEMO);
    }
    text
}
