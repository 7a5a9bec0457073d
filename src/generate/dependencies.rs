//! Constructor-dependency planning: class-typed constructor parameters
//! become mock declarations plus a consolidated argument list.

use crate::common::text::snake_case;
use crate::descriptor::ParamDescriptor;

/// One mock to declare in the generated setup code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyPlan {
    /// Qualified path of the dependency type
    pub class_name: String,
    /// Final path segment
    pub short_name: String,
    /// Variable the generated constructor call references
    pub mock_var: String,
}

/// Plans mocks for every class-typed constructor parameter, in parameter
/// order, and joins their variable references into the constructor-call
/// argument list. Parameters without a class type contribute nothing.
pub fn plan_dependencies(
    params: &[ParamDescriptor],
    mock_prefix: &str,
) -> (Vec<DependencyPlan>, String) {
    let plans: Vec<DependencyPlan> = params
        .iter()
        .filter_map(|param| {
            param.class_type.as_ref().map(|class_name| {
                let short_name = class_name
                    .rsplit("::")
                    .next()
                    .unwrap_or(class_name)
                    .to_string();
                let mock_var = format!("{mock_prefix}{}", snake_case(&short_name));
                DependencyPlan {
                    class_name: class_name.clone(),
                    short_name,
                    mock_var,
                }
            })
        })
        .collect();

    let arg_list = plans
        .iter()
        .map(|plan| plan.mock_var.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    (plans, arg_list)
}
