/// A primitive function symbol.
///
/// Every glyph is overloaded by valence: the same symbol names a monadic
/// function when it has only a right argument and a dyadic function when it
/// has arguments on both sides. The implementations live in the primitive
/// table (`interpreter::evaluator::primitive::core`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Glyph {
    /// `+` identity / addition.
    Plus,
    /// `−` negation / subtraction.
    Minus,
    /// `×` signum / multiplication.
    Times,
    /// `÷` reciprocal / division.
    Divide,
    /// `⋆` exponential / power.
    Power,
    /// `⍟` natural logarithm / logarithm to a base.
    Log,
    /// `⌈` ceiling / maximum.
    Ceiling,
    /// `⌊` floor / minimum.
    Floor,
    /// `|` magnitude / residue.
    Residue,
    /// `⍳` index generator.
    Iota,
    /// `⍴` shape / reshape.
    Rho,
    /// `,` ravel / catenate.
    Catenate,
    /// `=` equality.
    Equal,
}

impl Glyph {
    /// Every glyph, in the order they are listed by `help`.
    pub const ALL: [Self; 13] = [Self::Plus,
                                 Self::Minus,
                                 Self::Times,
                                 Self::Divide,
                                 Self::Power,
                                 Self::Log,
                                 Self::Ceiling,
                                 Self::Floor,
                                 Self::Residue,
                                 Self::Iota,
                                 Self::Rho,
                                 Self::Catenate,
                                 Self::Equal];

    /// The canonical APL symbol of the glyph.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Minus => '−',
            Self::Times => '×',
            Self::Divide => '÷',
            Self::Power => '⋆',
            Self::Log => '⍟',
            Self::Ceiling => '⌈',
            Self::Floor => '⌊',
            Self::Residue => '|',
            Self::Iota => '⍳',
            Self::Rho => '⍴',
            Self::Catenate => ',',
            Self::Equal => '=',
        }
    }

    /// ASCII spellings accepted by the lexer in place of the symbol.
    ///
    /// The word spellings are reserved and cannot be used as variable names.
    #[must_use]
    pub const fn fallbacks(self) -> &'static [&'static str] {
        match self {
            Self::Plus | Self::Catenate => &[],
            Self::Minus => &["-"],
            Self::Times => &["*", "sign"],
            Self::Divide => &["/", "recip"],
            Self::Power => &["^", "**", "exp"],
            Self::Log => &["ln"],
            Self::Ceiling => &["ceil"],
            Self::Floor => &["floor"],
            Self::Residue => &["abs", "%", "mod"],
            Self::Iota => &["iota"],
            Self::Rho => &["rho"],
            Self::Equal => &["=="],
        }
    }

    /// Looks a glyph up by its symbol or one of its fallbacks.
    ///
    /// # Example
    /// ```
    /// use apl360::interpreter::glyph::Glyph;
    ///
    /// assert_eq!(Glyph::from_name("⍳"), Some(Glyph::Iota));
    /// assert_eq!(Glyph::from_name("iota"), Some(Glyph::Iota));
    /// assert_eq!(Glyph::from_name("**"), Some(Glyph::Power));
    /// assert_eq!(Glyph::from_name("mod"), Some(Glyph::Residue));
    /// assert_eq!(Glyph::from_name("nope"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|glyph| {
                                 let mut buf = [0; 4];
                                 glyph.symbol().encode_utf8(&mut buf) == name
                                 || glyph.fallbacks().contains(&name)
                             })
    }
}

impl std::fmt::Display for Glyph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
