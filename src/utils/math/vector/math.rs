use std::cmp::Ordering;

use num::Num;

use super::ZeroSpVec;

impl<N> ZeroSpVec<N>
where
    N: Num + Copy + Into<f64>,
{
    /// ドット積を計算するメソッド
    /// 共通する index だけを merge-join で走査します
    /// コストは O(nnz(self) + nnz(other))
    ///
    /// # Arguments
    /// * `other` - 他のベクトル
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        let (a_inds, a_vals) = (self.indices(), self.values());
        let (b_inds, b_vals) = (other.indices(), other.values());
        if a_inds.is_empty() || b_inds.is_empty() {
            return 0.0;
        }

        let mut result = 0.0_f64;
        let mut i = 0;
        let mut j = 0;
        while i < a_inds.len() && j < b_inds.len() {
            match a_inds[i].cmp(&b_inds[j]) {
                Ordering::Equal => {
                    result += a_vals[i].into() * b_vals[j].into();
                    i += 1;
                    j += 1;
                }
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
            }
        }
        result
    }

    #[inline]
    pub fn norm_sq(&self) -> f64 {
        self.values()
            .iter()
            .map(|&v| {
                let v: f64 = v.into();
                v * v
            })
            .sum()
    }

    /// ユークリッドノルム
    #[inline]
    pub fn norm(&self) -> f64 {
        self.norm_sq().sqrt()
    }

    /// cosθ = A・B / (|A||B|)
    /// どちらかが 0 ベクトルなら 0 (NaN にはしない)
    #[inline]
    pub fn cosine(&self, other: &Self) -> f64 {
        cosine_with_norms(self.dot(other), self.norm(), other.norm())
    }
}

/// ノルムが既知の場合の cosine
/// 0 ベクトルを含む場合は 0
#[inline]
pub fn cosine_with_norms(dot: f64, norm_a: f64, norm_b: f64) -> f64 {
    let denom = norm_a * norm_b;
    if denom > 0.0 && denom.is_finite() {
        dot / denom
    } else {
        0.0
    }
}
