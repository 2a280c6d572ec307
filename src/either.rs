//! A sum type for computations that produce one of two values.
//!
//! # Either vs Result
//!
//! `Either<L, R>` carries either a `Left(L)` or a `Right(R)`. By the usual FP
//! convention it is "right-biased": `Right` is the happy path, `Left` the
//! rejection, and `map` operates on `Right`. Unlike `Result` it is not wired
//! into `?`, which is the point — validation failures here are ordinary
//! values that get collected and folded, never early-returned.
//!
//! Every validator in this crate returns `Either<String, String>` (message on
//! the left, accepted value on the right), and the form orchestrator returns
//! `Either<Vec<FieldError>, FieldValues>`. Callers consume the final result
//! through [`fold`](Either::fold), which invokes exactly one of two handlers.
//!
//! # Examples
//!
//! ```rust
//! use acervo::Either;
//!
//! fn check(name: &str) -> Either<String, String> {
//!     if name.is_empty() {
//!         Either::left("O nome da obra deve ser informado".to_string())
//!     } else {
//!         Either::right(name.to_string())
//!     }
//! }
//!
//! let outcome = check("Abaporu").fold(
//!     |message| format!("rejected: {}", message),
//!     |value| format!("accepted: {}", value),
//! );
//! assert_eq!(outcome, "accepted: Abaporu");
//! ```

/// A value that is either `Left(L)` or `Right(R)`.
///
/// `Left` carries a rejection, `Right` an accepted value. Exactly one variant
/// is ever active, and a constructed `Either` is never mutated by this crate.
///
/// # Example
///
/// ```rust
/// use acervo::Either;
///
/// let ok: Either<String, i32> = Either::right(1968);
/// let bad: Either<String, i32> = Either::left("O ano da obra deve ser informado".to_string());
///
/// assert!(ok.is_right());
/// assert!(bad.is_left());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Either<L, R> {
    /// The rejection variant.
    Left(L),
    /// The accepted variant.
    Right(R),
}

impl<L, R> Either<L, R> {
    // ========== Constructors ==========

    /// Create a `Left` value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use acervo::Either;
    ///
    /// let e: Either<&str, i32> = Either::left("too short");
    /// assert!(e.is_left());
    /// ```
    #[inline]
    pub fn left(value: L) -> Self {
        Either::Left(value)
    }

    /// Create a `Right` value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use acervo::Either;
    ///
    /// let e: Either<&str, i32> = Either::right(1922);
    /// assert!(e.is_right());
    /// ```
    #[inline]
    pub fn right(value: R) -> Self {
        Either::Right(value)
    }

    // ========== Predicates ==========

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    // ========== Extractors ==========

    /// Returns the left value if present, consuming self.
    ///
    /// # Example
    ///
    /// ```rust
    /// use acervo::Either;
    ///
    /// let e: Either<&str, i32> = Either::left("too short");
    /// assert_eq!(e.into_left(), Some("too short"));
    /// ```
    #[inline]
    pub fn into_left(self) -> Option<L> {
        match self {
            Either::Left(l) => Some(l),
            Either::Right(_) => None,
        }
    }

    /// Returns the right value if present, consuming self.
    ///
    /// # Example
    ///
    /// ```rust
    /// use acervo::Either;
    ///
    /// let e: Either<&str, i32> = Either::right(1922);
    /// assert_eq!(e.into_right(), Some(1922));
    /// ```
    #[inline]
    pub fn into_right(self) -> Option<R> {
        match self {
            Either::Left(_) => None,
            Either::Right(r) => Some(r),
        }
    }

    /// Convert to `Either<&L, &R>`.
    #[inline]
    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    // ========== Transformations ==========

    /// Transform the left value, passing `Right` through unchanged.
    ///
    /// This is how the orchestrator attaches field identity to a bare
    /// validator message without touching accepted values.
    ///
    /// # Example
    ///
    /// ```rust
    /// use acervo::Either;
    ///
    /// let bad: Either<&str, &str> = Either::left("too short");
    /// let tagged = bad.map_left(|m| format!("name: {}", m));
    /// assert_eq!(tagged, Either::left("name: too short".to_string()));
    ///
    /// let ok: Either<&str, &str> = Either::right("Abaporu");
    /// assert_eq!(ok.map_left(|m| format!("name: {}", m)), Either::right("Abaporu"));
    /// ```
    #[inline]
    pub fn map_left<L2, F>(self, f: F) -> Either<L2, R>
    where
        F: FnOnce(L) -> L2,
    {
        match self {
            Either::Left(l) => Either::Left(f(l)),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Transform the right value, passing `Left` through unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use acervo::Either;
    ///
    /// let ok: Either<&str, i32> = Either::right(1922);
    /// assert_eq!(ok.map_right(|y| y + 1), Either::right(1923));
    /// ```
    #[inline]
    pub fn map_right<R2, F>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> R2,
    {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(f(r)),
        }
    }

    /// Transform the right value (right-biased `map`).
    ///
    /// Alias for [`map_right`](Either::map_right).
    #[inline]
    pub fn map<R2, F>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> R2,
    {
        self.map_right(f)
    }

    // ========== Folding ==========

    /// Fold both variants into a single value.
    ///
    /// Invokes exactly one of the two handlers with the contained value and
    /// returns its result. This is the sole branching point callers of the
    /// orchestrator need.
    ///
    /// # Example
    ///
    /// ```rust
    /// use acervo::Either;
    ///
    /// let bad: Either<&str, i32> = Either::left("not a year");
    /// let ok: Either<&str, i32> = Either::right(1922);
    ///
    /// assert_eq!(bad.fold(|m| m.len(), |y| y as usize), 10);
    /// assert_eq!(ok.fold(|m| m.len(), |y| y as usize), 1922);
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, left_fn: F, right_fn: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Either::Left(l) => left_fn(l),
            Either::Right(r) => right_fn(r),
        }
    }

    /// Return the left value or a default.
    #[inline]
    pub fn left_or(self, default: L) -> L {
        match self {
            Either::Left(l) => l,
            Either::Right(_) => default,
        }
    }

    /// Return the right value or a default.
    #[inline]
    pub fn right_or(self, default: R) -> R {
        match self {
            Either::Left(_) => default,
            Either::Right(r) => r,
        }
    }

    /// Convert to a `Result`, mapping `Right` to `Ok` and `Left` to `Err`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use acervo::Either;
    ///
    /// let ok: Either<&str, i32> = Either::right(1922);
    /// assert_eq!(ok.into_result(), Ok(1922));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<R, L> {
        match self {
            Either::Left(l) => Err(l),
            Either::Right(r) => Ok(r),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(r) => Either::Right(r),
            Err(l) => Either::Left(l),
        }
    }
}
