/// Declares a fieldless enum whose variants each carry the same set of
/// constant attributes. Every attribute gets an accessor method and the enum
/// derives `EnumIter` so callers can walk the variants in declaration order.
///
/// ```ignore
/// attributed_enum! {
///     pub enum Column: ColumnInfo (label: &'static str, optional: bool) {
///         Name { label: "Name", optional: false },
///         Note { label: "Note", optional: true },
///     }
/// }
/// ```
#[macro_export]
macro_rules! attributed_enum {
	(
		$visibility: vis enum $name: ident : $info: ident ( $($attribname: ident : $attribtype: ty),* $(,)? ) {
			$($variant: ident { $($field: ident : $value: expr),* $(,)? }),* $(,)?
		}
	) => {
		#[derive(strum_macros::EnumIter, Copy, Clone, Debug, PartialEq, Eq)]
		$visibility enum $name {
			$($variant),*
		}

		struct $info {
			$($attribname: $attribtype),*
		}

		impl $name {
			fn info(self) -> $info {
				match self {
					$(
						Self::$variant => $info {
							$($field: $value),*
						}
					),*
				}
			}

			$(
				#[allow(dead_code)]
				pub fn $attribname(self) -> $attribtype {
					self.info().$attribname
				}
			)*
		}
	};
}
