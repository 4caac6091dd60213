pub mod math;

use std::fmt::{self, Debug};

use num::Num;
use serde::{Deserialize, Serialize};

use crate::utils::sort::{is_strictly_sorted, sort_by_index_soa};

/// ZeroSpVec は 0 要素を疎とした疎ベクトルです
/// indices と values を SoA で持ちます
///
/// - indices は term id (u32)
/// - 要素は indices の昇順でソートされていることを保証します
/// - 0 の値は保持しません
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct ZeroSpVec<N>
where
    N: Num + Copy,
{
    inds: Vec<u32>,
    vals: Vec<N>,
}

impl<N> ZeroSpVec<N>
where
    N: Num + Copy,
{
    #[inline]
    pub fn new() -> Self {
        ZeroSpVec {
            inds: Vec::new(),
            vals: Vec::new(),
        }
    }

    #[inline]
    pub fn with_capacity(cap: usize) -> Self {
        ZeroSpVec {
            inds: Vec::with_capacity(cap),
            vals: Vec::with_capacity(cap),
        }
    }

    /// 順不同の (index, value) から構築します
    /// 0 の値は捨てられます
    ///
    /// # Arguments
    /// * `inds` - 重複のない index
    /// * `vals` - `inds` と同じ長さの値
    pub fn from_unsorted(mut inds: Vec<u32>, mut vals: Vec<N>) -> Self {
        sort_by_index_soa(&mut inds, &mut vals);
        debug_assert!(is_strictly_sorted(&inds), "duplicate index in sparse vector");
        let mut out = ZeroSpVec::with_capacity(inds.len());
        for (i, v) in inds.into_iter().zip(vals) {
            out.raw_push(i, v);
        }
        out.shrink_to_fit();
        out
    }

    /// 末尾に追加します
    /// index は直前より大きい必要があります
    #[inline]
    fn raw_push(&mut self, index: u32, value: N) {
        if value == N::zero() {
            return;
        }
        debug_assert!(self.inds.last().map_or(true, |&last| last < index));
        self.inds.push(index);
        self.vals.push(value);
    }

    #[inline]
    pub fn shrink_to_fit(&mut self) {
        self.inds.shrink_to_fit();
        self.vals.shrink_to_fit();
    }

    /// non-zero の数
    #[inline]
    pub fn nnz(&self) -> usize {
        self.inds.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inds.is_empty()
    }

    /// index の値を返します 無ければ 0
    #[inline]
    pub fn get(&self, index: u32) -> N {
        match self.inds.binary_search(&index) {
            Ok(pos) => self.vals[pos],
            Err(_) => N::zero(),
        }
    }

    #[inline]
    pub fn contains(&self, index: u32) -> bool {
        self.inds.binary_search(&index).is_ok()
    }

    /// 最大の index
    #[inline]
    pub fn max_index(&self) -> Option<u32> {
        self.inds.last().copied()
    }

    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.inds
    }

    #[inline]
    pub fn values(&self) -> &[N] {
        &self.vals
    }

    /// non-zero 要素を index 昇順で走査します
    #[inline]
    pub fn raw_iter(&self) -> impl Iterator<Item = (u32, &N)> + '_ {
        self.inds.iter().copied().zip(self.vals.iter())
    }

    /// 各要素に f を適用した新しいベクトルを返します
    /// 結果が 0 になった要素は落とします
    pub fn map_nonzero<M, F>(&self, mut f: F) -> ZeroSpVec<M>
    where
        M: Num + Copy,
        F: FnMut(u32, N) -> M,
    {
        let mut out = ZeroSpVec::with_capacity(self.nnz());
        for (i, v) in self.raw_iter() {
            out.raw_push(i, f(i, *v));
        }
        out.shrink_to_fit();
        out
    }
}

impl<N> Default for ZeroSpVec<N>
where
    N: Num + Copy,
{
    #[inline]
    fn default() -> Self {
        ZeroSpVec::new()
    }
}

impl<N> Debug for ZeroSpVec<N>
where
    N: Num + Copy + Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "ZeroSpVec(nnz: {})", self.nnz())
        } else {
            f.debug_map().entries(self.raw_iter()).finish()
        }
    }
}
