use crate::error::{LaunchLabError, Result};
use ruint::aliases::U256;

pub trait SafeMath: Sized {
    fn safe_add(self, rhs: Self) -> Result<Self>;
    fn safe_sub(self, rhs: Self) -> Result<Self>;
    fn safe_mul(self, rhs: Self) -> Result<Self>;
    fn safe_div(self, rhs: Self) -> Result<Self>;
}

macro_rules! checked_impl {
    ($t:ty) => {
        impl SafeMath for $t {
            #[inline(always)]
            fn safe_add(self, v: $t) -> Result<$t> {
                self.checked_add(v).ok_or(LaunchLabError::MathOverflow)
            }

            #[inline(always)]
            fn safe_sub(self, v: $t) -> Result<$t> {
                self.checked_sub(v).ok_or(LaunchLabError::MathOverflow)
            }

            #[inline(always)]
            fn safe_mul(self, v: $t) -> Result<$t> {
                self.checked_mul(v).ok_or(LaunchLabError::MathOverflow)
            }

            #[inline(always)]
            fn safe_div(self, v: $t) -> Result<$t> {
                self.checked_div(v).ok_or(LaunchLabError::MathOverflow)
            }
        }
    };
}

checked_impl!(u64);
checked_impl!(u128);
checked_impl!(U256);

#[inline]
pub fn to_u64<T>(value: T) -> Result<u64>
where
    u64: TryFrom<T>,
{
    u64::try_from(value).map_err(|_| LaunchLabError::MathOverflow)
}

#[inline]
pub fn to_u128<T>(value: T) -> Result<u128>
where
    u128: TryFrom<T>,
{
    u128::try_from(value).map_err(|_| LaunchLabError::MathOverflow)
}
