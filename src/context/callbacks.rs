/*!
Callbacks from a context, and the types of callback functions.

Callbacks allow a caller to observe, and in one case steer, saturation while it happens.
Each callback is optional, owned by the structure which makes it, and set through a dedicated
method.

# Example

```rust
# use stoat_res::{config::Config, context::Context, structures::term::Term};
let mut the_context = Context::from_config(Config::default());

the_context
    .clause_db
    .set_callback_resolvent(Box::new(|left, right, resolvent| {
        println!("({left}) / ({right}) = ({resolvent})");
    }));
```
*/

use crate::{context::Context, structures::term::Term};

/// A callback over a resolvent and its premises, in the order: left premise, right premise,
/// resolvent.
pub type CallbackOnResolvent = dyn FnMut(&Term, &Term, &Term);

/// A callback over a single clause.
pub type CallbackOnClause = dyn FnMut(&Term);

/// A callback which returns whether to terminate saturation.
pub type CallbackTerminate = dyn FnMut() -> bool;

impl Context {
    /// Sets a callback made between saturation rounds, with saturation interrupted if the
    /// callback returns true.
    pub fn set_callback_terminate(&mut self, callback: Box<CallbackTerminate>) {
        self.callback_terminate = Some(callback);
    }

    /// Makes the termination callback and returns the result, or false if no callback is set.
    pub fn check_callback_terminate(&mut self) -> bool {
        match &mut self.callback_terminate {
            Some(callback) => callback(),
            None => false,
        }
    }
}
