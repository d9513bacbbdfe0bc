//! # 节点分布
//!
//! 线性与余弦分布的采样点序列。

use std::f64::consts::PI;

/// 在 [start, end] 上均匀取 n 个点（含端点）
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// 在 [start, end] 上取 n 个余弦分布的点，两端加密
pub fn cosspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let mean = 0.5 * (start + end);
            let amp = 0.5 * (end - start);
            (0..n)
                .map(|i| {
                    if i == n - 1 {
                        end
                    } else {
                        mean - amp * (PI * i as f64 / (n - 1) as f64).cos()
                    }
                })
                .collect()
        }
    }
}
