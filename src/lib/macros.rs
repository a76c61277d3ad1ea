macro_rules! getters {
    ($($field:tt)*) => (getters_inner! { $($field)* });
}

macro_rules! getters_inner {
    () => ();
    (ref $name:ident: $kind:ty, $($rest:tt)*) => (
        #[inline(always)]
        pub fn $name(&self) -> &$kind {
            &self.$name
        }
        getters_inner! { $($rest)* }
    );
    ($name:ident: $kind:ty, $($rest:tt)*) => (
        #[inline(always)]
        pub fn $name(&self) -> $kind {
            self.$name
        }
        getters_inner! { $($rest)* }
    );
}

macro_rules! itemize(($($blob:item)*) => ($($blob)*));

macro_rules! order {
    ($name:ident($field:tt) ascending) => (order! { $name($field) Less < Greater });
    ($name:ident($field:tt) descending) => (order! { $name($field) Greater < Less });
    ($name:ident($field:tt) $less:ident < $greater:ident) => (itemize! {
        impl ::std::cmp::Eq for $name {
        }

        impl ::std::cmp::Ord for $name {
            fn cmp(&self, other: &Self) -> ::std::cmp::Ordering {
                if self.$field < other.$field {
                    ::std::cmp::Ordering::$less
                } else if self.$field > other.$field {
                    ::std::cmp::Ordering::$greater
                } else {
                    ::std::cmp::Ordering::Equal
                }
            }
        }

        impl ::std::cmp::PartialEq for $name {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                self.$field == other.$field
            }
        }

        impl ::std::cmp::PartialOrd for $name {
            #[inline]
            fn partial_cmp(&self, other: &Self) -> Option<::std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }
    });
}

macro_rules! raise(
    ($kind:ident, $message:expr) => (
        return Err(::Error::new(::ErrorKind::$kind, $message))
    );
    ($kind:ident, $($arg:tt)*) => (
        return Err(::Error::new(::ErrorKind::$kind, format!($($arg)*)))
    );
);

macro_rules! some(
    ($option:expr) => (match $option {
        Some(value) => value,
        _ => raise!(Internal, "encountered a logic error"),
    });
    ($option:expr, $kind:ident, $($arg:tt)+) => (match $option {
        Some(value) => value,
        _ => raise!($kind, $($arg)*),
    });
);
