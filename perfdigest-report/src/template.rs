//! Static Report Prose
//!
//! Sections of the markdown report that do not depend on measurements. They
//! are plain configuration so the narrative can be edited in
//! `perfdigest.toml` without touching any rendering code.

use serde::{Deserialize, Serialize};

const DEFAULT_TITLE: &str = "GPU Matrix Inversion Profiling Report";

const DEFAULT_ALGORITHM_OVERVIEW: &str = "\
#### rocSOLVER Approach
- Uses optimized GETRF (LU factorization) from AMD rocSOLVER
- Followed by GETRI (matrix inversion using LU factors)
- Advantages: Numerical stability, vendor-optimized
- Complexity: O(N³) with N=341

#### Hybrid Approach
- GETRF for LU decomposition
- TRSM (Triangular Solve) for solving L*X=I and U*X=I
- Advantages: Better data reuse, potential for fused kernels
- Complexity: O(N³) operations with better memory access";

const DEFAULT_BOTTLENECK_ANALYSIS: &str = "\
**Matrix Inversion FLOPs:**
- LU Decomposition: (2N³/3 - N²/2 + 5N/6) FLOPs
- For N=341: ~157 million FLOPs
- At 1.6 ms (hybrid): ~98 GFLOPs achieved
- Peak theoretical (40 TFLOPs): utilization ~0.25%

**Arithmetic Intensity:**
- Matrix size: 341×341 × 2 floats (complex) = ~930 KB
- 157 million FLOPs / 930 KB ≈ 169 FLOPs/byte
- Very high arithmetic intensity → Compute-bound";

/// A link in the references section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    /// Link text
    pub title: String,
    /// Target URL
    pub url: String,
}

impl Reference {
    fn new(title: &str, url: &str) -> Self {
        Self {
            title: title.to_string(),
            url: url.to_string(),
        }
    }
}

/// Prose sections of the markdown report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportTemplate {
    /// Document title
    pub title: String,
    /// Markdown body of "Algorithm Overview"
    pub algorithm_overview: String,
    /// Markdown body of "Performance Bottleneck Analysis"
    pub bottleneck_analysis: String,
    /// Numbered recommendation items
    pub recommendations: Vec<String>,
    /// Known limitation bullets
    pub limitations: Vec<String>,
    /// Reference links
    pub references: Vec<Reference>,
}

impl Default for ReportTemplate {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            algorithm_overview: DEFAULT_ALGORITHM_OVERVIEW.to_string(),
            bottleneck_analysis: DEFAULT_BOTTLENECK_ANALYSIS.to_string(),
            recommendations: [
                "**Use Hybrid Approach** - GETRF + TRSM shows better performance",
                "**Ensure LDS Optimization** - Cache A and B blocks in LDS",
                "**Register Tiling** - Use register tiles for GEMM operations",
                "**Memory Coalescing** - Align memory accesses to 128-byte boundaries",
                "**Wave Occupancy** - Target 80%+ occupancy with 256 threads/block",
            ]
            .map(String::from)
            .to_vec(),
            limitations: [
                "Single matrix size (341×341) - may not generalize",
                "No comparison with NVIDIA A100 baseline",
                "rocSOLVER version specific optimizations not explored",
            ]
            .map(String::from)
            .to_vec(),
            references: vec![
                Reference::new(
                    "AMD rocSOLVER Documentation",
                    "https://rocm.docs.amd.com/projects/rocSOLVER/",
                ),
                Reference::new(
                    "AMD rocBLAS Documentation",
                    "https://rocm.docs.amd.com/projects/rocBLAS/",
                ),
                Reference::new("GPU Kernel Profiling Best Practices", "https://apxml.com/"),
                Reference::new(
                    "RDNA Performance Guide",
                    "https://gpuopen.com/learn/rdna-performance-guide/",
                ),
            ],
        }
    }
}
