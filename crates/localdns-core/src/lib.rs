// # localdns-core
//
// Core library for the Local DNS administrative console.
//
// ## Architecture Overview
//
// This library provides the orchestration layer between a presentation shell
// and the remote Dashboard API:
// - **DirectoryApi** / **LocalDnsApi**: Traits for the remote APIs (implemented
//   by `localdns-provider-meraki`)
// - **Session**: Selected organization plus its own directory cache
// - **DirectoryCache**: Memoized organization and per-organization network lists
// - **LocalDnsConsole**: Joins profiles, assignments and networks into display
//   rows and forwards create/delete commands
// - **ApiError**: The single normalized shape of every remote failure
//
// ## Design Principles
//
// 1. **Remote is the source of truth**: Profiles, records and assignments are
//    always fetched fresh; only directory data is cached
// 2. **Explicit context**: No global state; the session is passed to every call
// 3. **Errors propagate**: A failed fetch is an error, never an empty list
// 4. **No reordering**: Rows keep the order the remote returned

pub mod traits;
pub mod console;
pub mod cache;
pub mod config;
pub mod error;
pub mod model;
pub mod session;
pub mod views;

// Re-export core types for convenience
pub use traits::{ApiResponse, Created, DirectoryApi, LocalDnsApi};
pub use console::LocalDnsConsole;
pub use cache::DirectoryCache;
pub use config::ConsoleConfig;
pub use error::{ApiError, ApiErrorKind, ApiResult, Error, Result};
pub use session::Session;
pub use views::{Tabular, UNASSIGNED, UNKNOWN};

/// Notice shown before the console is used
pub const DISCLAIMER_MESSAGE: &str = "THE SOFTWARE IS PROVIDED \"AS IS\", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.";
